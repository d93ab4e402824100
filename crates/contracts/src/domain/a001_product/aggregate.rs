use serde::{Deserialize, Serialize};

use crate::domain::a002_category::aggregate::CategorySelection;

/// Товар, полученный из источника каталога.
///
/// Значение неизменяемо после получения: сортировка и накопление
/// работают с копиями, сам товар никогда не модифицируется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Уникальный и стабильный между страницами идентификатор
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    /// Скидка в процентах (0–100)
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Проверить, попадает ли товар в выбранную категорию
    pub fn belongs_to(&self, selection: &CategorySelection) -> bool {
        match selection {
            CategorySelection::All => true,
            CategorySelection::Named(name) => &self.category == name,
        }
    }
}

/// Страница товаров в формате источника: `{ products, total, skip, limit }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_page_from_upstream_json() {
        let raw = r#"{
            "products": [{
                "id": 1,
                "title": "Essence Mascara Lash Princess",
                "description": "Popular mascara",
                "category": "beauty",
                "price": 9.99,
                "discountPercentage": 7.17,
                "rating": 4.94,
                "stock": 5,
                "brand": "Essence",
                "thumbnail": "https://cdn.example/1/thumbnail.png",
                "images": ["https://cdn.example/1/1.png"],
                "tags": ["beauty", "mascara"]
            }],
            "total": 194,
            "skip": 0,
            "limit": 1
        }"#;

        let page: ProductPage = serde_json::from_str(raw).unwrap();
        assert_eq!(page.total, 194);
        assert_eq!(page.products.len(), 1);

        let product = &page.products[0];
        assert_eq!(product.id, 1);
        assert_eq!(product.discount_percentage, 7.17);
        assert_eq!(product.brand.as_deref(), Some("Essence"));
        assert_eq!(product.images.len(), 1);
    }

    #[test]
    fn test_missing_optional_fields() {
        let raw = r#"{"id": 7, "title": "Bare", "price": 1.5}"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.brand, None);
        assert!(product.images.is_empty());
        assert_eq!(product.category, "");
    }

    #[test]
    fn test_belongs_to() {
        let product: Product =
            serde_json::from_str(r#"{"id": 1, "title": "Phone", "price": 100, "category": "smartphones"}"#)
                .unwrap();
        assert!(product.belongs_to(&CategorySelection::All));
        assert!(product.belongs_to(&CategorySelection::Named("smartphones".into())));
        assert!(!product.belongs_to(&CategorySelection::Named("laptops".into())));
    }
}
