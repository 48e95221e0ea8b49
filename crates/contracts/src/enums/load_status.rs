use serde::{Deserialize, Serialize};
use std::fmt;

/// Статус загрузки каталога
///
/// Коллекция товаров считается пригодной для показа только в `Loaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoadStatus {
    Loading,
    Loaded,
    Failed,
}

impl LoadStatus {
    pub fn code(&self) -> &'static str {
        match self {
            LoadStatus::Loading => "LOADING",
            LoadStatus::Loaded => "LOADED",
            LoadStatus::Failed => "FAILED",
        }
    }

    /// Можно ли показывать коллекцию пользователю
    pub fn is_displayable(&self) -> bool {
        matches!(self, LoadStatus::Loaded)
    }

    /// Имеет ли смысл предлагать повторную загрузку
    pub fn can_retry(&self) -> bool {
        matches!(self, LoadStatus::Failed)
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
