pub mod wishlist;

pub use wishlist::Wishlist;
