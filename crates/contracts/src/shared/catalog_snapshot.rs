use crate::domain::a001_product::{Product, ProductId};
use crate::enums::load_status::LoadStatus;
use crate::enums::sort_selection::SortSelection;
use crate::shared::category_filter::CategoryFilter;
use serde::{Deserialize, Serialize};

/// Состояние каталога, которое получает слой отображения после каждого изменения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub status: LoadStatus,

    /// Отфильтрованный и отсортированный список; пуст, пока статус не `Loaded`
    #[serde(rename = "visibleProducts")]
    pub visible_products: Vec<Product>,

    /// Категории текущей коллекции, по возрастанию, без повторов
    pub categories: Vec<String>,

    #[serde(rename = "categoryFilter")]
    pub category_filter: CategoryFilter,

    #[serde(rename = "sortSelection")]
    pub sort_selection: SortSelection,

    /// Id товаров в вишлисте, в порядке добавления
    #[serde(rename = "wishlistIds")]
    pub wishlist_ids: Vec<ProductId>,
}

impl CatalogSnapshot {
    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.wishlist_ids.contains(&id)
    }

    pub fn wishlist_len(&self) -> usize {
        self.wishlist_ids.len()
    }
}
