//! Производный список товаров: фильтр по категории, затем сортировка копии.
//!
//! Функции чистые: исходная коллекция никогда не изменяется.

use contracts::domain::a001_product::Product;
use contracts::enums::sort_selection::SortSelection;
use contracts::shared::category_filter::CategoryFilter;
use feruca::Collator;
use std::cmp::Ordering;

/// Категории коллекции по возрастанию, без повторов
pub fn available_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Сравнение названий по Unicode Collation Algorithm (корневая локаль CLDR):
/// диакритика и регистр учитываются только при равенстве базовых букв,
/// строчные идут раньше заглавных.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let mut collator = Collator::default();
    collator.collate(a, b)
}

/// Сортирует список по выбранному компаратору (сортировка стабильная)
pub fn sort_products(items: &mut [Product], selection: SortSelection) {
    match selection {
        SortSelection::None => {}
        SortSelection::PriceLowToHigh => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortSelection::PriceHighToLow => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortSelection::Alphabetical => {
            let mut collator = Collator::default();
            items.sort_by(|a, b| collator.collate(&a.title, &b.title));
        }
    }
}

/// Фильтрует по категории и сортирует копию коллекции
pub fn visible_list(
    products: &[Product],
    filter: &CategoryFilter,
    selection: SortSelection,
) -> Vec<Product> {
    let mut items: Vec<Product> = products
        .iter()
        .filter(|p| filter.matches(&p.category))
        .cloned()
        .collect();
    sort_products(&mut items, selection);
    items
}
