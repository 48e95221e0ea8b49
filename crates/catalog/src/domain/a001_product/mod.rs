pub mod visible_list;

pub use visible_list::{available_categories, compare_titles, sort_products, visible_list};
