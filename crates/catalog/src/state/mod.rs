pub mod catalog_store;
pub mod subscribers;
