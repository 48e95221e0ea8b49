use serde::{Deserialize, Serialize};
use std::fmt;

/// Варианты сортировки списка товаров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortSelection {
    /// Порядок, в котором товары пришли с API
    #[default]
    None,
    #[serde(rename = "priceLowHigh")]
    PriceLowToHigh,
    #[serde(rename = "priceHighLow")]
    PriceHighToLow,
    Alphabetical,
}

impl SortSelection {
    /// Получить код сортировки
    pub fn code(&self) -> &'static str {
        match self {
            SortSelection::None => "none",
            SortSelection::PriceLowToHigh => "priceLowHigh",
            SortSelection::PriceHighToLow => "priceHighLow",
            SortSelection::Alphabetical => "alphabetical",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            SortSelection::None => "None",
            SortSelection::PriceLowToHigh => "Price: Low to High",
            SortSelection::PriceHighToLow => "Price: High to Low",
            SortSelection::Alphabetical => "Alphabetical",
        }
    }

    /// Получить все варианты сортировки (в порядке отображения)
    pub fn all() -> Vec<SortSelection> {
        vec![
            SortSelection::None,
            SortSelection::PriceLowToHigh,
            SortSelection::PriceHighToLow,
            SortSelection::Alphabetical,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "none" => Some(SortSelection::None),
            "priceLowHigh" => Some(SortSelection::PriceLowToHigh),
            "priceHighLow" => Some(SortSelection::PriceHighToLow),
            "alphabetical" => Some(SortSelection::Alphabetical),
            _ => None,
        }
    }
}

impl fmt::Display for SortSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
