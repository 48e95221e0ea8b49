use serde::{Deserialize, Serialize};
use std::fmt;

/// Фильтр по категории: либо "All", либо конкретная категория.
///
/// Сравнение категорий точное, с учётом регистра.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Метка, которой UI обозначает отсутствие фильтра
    pub const ALL_LABEL: &'static str = "All";

    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == Self::ALL_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(label)
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Category(category) => category,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(selected) => selected == category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::from_label(value)
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::from_label(value)
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_label_maps_to_sentinel() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_label("all"),
            CategoryFilter::Category("all".to_string())
        );
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let filter = CategoryFilter::from_label("beauty");
        assert!(filter.matches("beauty"));
        assert!(!filter.matches("Beauty"));
        assert!(CategoryFilter::All.matches("anything"));
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&CategoryFilter::All).unwrap();
        assert_eq!(json, "\"All\"");
        let parsed: CategoryFilter = serde_json::from_str("\"furniture\"").unwrap();
        assert_eq!(parsed, CategoryFilter::Category("furniture".into()));
    }
}
