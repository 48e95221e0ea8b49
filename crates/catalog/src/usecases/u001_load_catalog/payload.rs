use crate::shared::error::FetchError;
use contracts::domain::a001_product::{Product, ProductId};
use serde::Deserialize;
use std::collections::HashSet;

/// Ответ API: либо массив товаров (fakestoreapi), либо объект с полем
/// `products` (dummyjson)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProductsPayload {
    List(Vec<ProductRecord>),
    Wrapped { products: Vec<ProductRecord> },
}

/// Запись товара в том виде, в каком её отдаёт API.
///
/// fakestoreapi присылает картинку в `image`, dummyjson в `thumbnail`,
/// а некоторые ответы содержат оба поля.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: ProductId,
    title: String,
    description: String,
    category: String,
    price: f64,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
}

impl ProductRecord {
    fn into_product(self) -> Result<Product, FetchError> {
        let image = self.image.or(self.thumbnail).ok_or_else(|| {
            FetchError::Payload(format!("Product {}: missing image or thumbnail", self.id))
        })?;
        Ok(Product {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            price: self.price,
            image,
        })
    }
}

/// Разбор тела ответа в коллекцию товаров.
///
/// Частичного успеха нет: любая невалидная запись делает весь ответ ошибкой.
pub fn parse_products(body: &str) -> Result<Vec<Product>, FetchError> {
    let payload: ProductsPayload = serde_json::from_str(body).map_err(|e| {
        FetchError::Payload(format!("expected a product array or {{\"products\": [...]}}: {}", e))
    })?;

    let records = match payload {
        ProductsPayload::List(records) => records,
        ProductsPayload::Wrapped { products } => products,
    };

    let products = records
        .into_iter()
        .map(ProductRecord::into_product)
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::with_capacity(products.len());
    for product in &products {
        product.validate().map_err(FetchError::Payload)?;
        if !seen.insert(product.id) {
            return Err(FetchError::Payload(format!(
                "duplicate product id {}",
                product.id
            )));
        }
    }

    Ok(products)
}
