pub mod catalog_snapshot;
pub mod category_filter;
