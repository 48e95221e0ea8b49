pub mod payload;
pub mod products_api_client;

pub use payload::parse_products;
pub use products_api_client::{HttpProductTransport, ProductTransport};
