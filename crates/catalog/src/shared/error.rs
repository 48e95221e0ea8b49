use thiserror::Error;

/// Ошибки загрузки каталога
///
/// Любая из них переводит каталог в статус `Failed`; приложение не падает.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Products API responded with status {0}")]
    Status(u16),

    #[error("Malformed products payload: {0}")]
    Payload(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Transport(err.to_string()),
        }
    }
}

/// Ошибки операций каталога
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown sort selection: {0}")]
    UnknownSortSelection(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
