pub mod domain;
pub mod shared;
pub mod state;
pub mod usecases;

pub use shared::error::{CatalogError, FetchError};
pub use state::catalog_store::CatalogStore;
pub use state::subscribers::{CatalogObserver, Subscription};
pub use usecases::u001_load_catalog::products_api_client::{HttpProductTransport, ProductTransport};
