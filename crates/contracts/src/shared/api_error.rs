use serde::{Deserialize, Serialize};

pub const PRODUCTS_FETCH_FAILED: &str = "Failed to fetch products";
pub const CATEGORIES_FETCH_FAILED: &str = "Failed to fetch categories";

/// Тело ответа с ошибкой: `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
