use contracts::domain::a001_product::{Product, ProductId};

/// Вишлист: набор товаров без повторов по `id`, в порядке добавления.
/// Живёт только в памяти.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Переключить товар: убрать, если он уже есть, иначе добавить.
    /// Возвращает `true`, если после вызова товар в вишлисте.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.remove(product.id) {
            false
        } else {
            self.items.push(product.clone());
            true
        }
    }

    /// Убрать товар по id; `false`, если его не было
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|p| p.id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
