use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Товар каталога. После получения с API не изменяется, идентичность по `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    /// Отображаемое название
    pub title: String,

    /// Описание (UI не показывает, но поле входит в контракт API)
    pub description: String,

    /// Категория для группировки и фильтрации
    pub category: String,

    /// Цена, неотрицательная
    pub price: f64,

    /// URL картинки
    pub image: String,
}

impl Product {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId(id),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            price,
            image: image.into(),
        }
    }

    /// Проверка инвариантов товара
    pub fn validate(&self) -> Result<(), String> {
        if !self.price.is_finite() {
            return Err(format!("Product {}: price is not a finite number", self.id));
        }
        if self.price < 0.0 {
            return Err(format!(
                "Product {}: price must be non-negative, got {}",
                self.id, self.price
            ));
        }
        Ok(())
    }
}
