//! Тексты для слоя отображения.

use contracts::enums::load_status::LoadStatus;

/// Строка о размере вишлиста
///
/// # Примеры
/// ```
/// use catalog::shared::format::wishlist_summary_text;
/// assert_eq!(wishlist_summary_text(1), "There is currently 1 item in your wishlist");
/// assert_eq!(wishlist_summary_text(3), "There are currently 3 items in your wishlist");
/// ```
pub fn wishlist_summary_text(count: usize) -> String {
    if count == 1 {
        return "There is currently 1 item in your wishlist".to_string();
    }
    format!("There are currently {} items in your wishlist", count)
}

/// Цена в долларах с двумя знаками после точки
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

pub fn wishlist_action_label(in_wishlist: bool) -> &'static str {
    if in_wishlist {
        "Remove from Wishlist"
    } else {
        "Add to Wishlist"
    }
}

/// Заголовок над списком; для `Loaded` заголовка нет
pub fn status_heading(status: LoadStatus) -> Option<&'static str> {
    match status {
        LoadStatus::Loading => Some("Loading..."),
        LoadStatus::Failed => Some("Failed to Load Products"),
        LoadStatus::Loaded => None,
    }
}
