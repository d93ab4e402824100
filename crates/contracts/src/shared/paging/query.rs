use serde::{Deserialize, Serialize};

use crate::domain::a002_category::aggregate::CategorySelection;

/// Размер страницы по умолчанию для каталога
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Запрос одной страницы каталога.
///
/// `page_index` нумеруется с 1 (как в интерфейсе), смещение для источника
/// вычисляется как `(page_index - 1) * page_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub category: CategorySelection,
    pub page_size: u32,
    pub page_index: u32,
}

impl PageRequest {
    pub fn new(category: CategorySelection, page_size: u32, page_index: u32) -> Self {
        Self {
            category,
            page_size: page_size.max(1),
            page_index: page_index.max(1),
        }
    }

    /// Смещение от начала коллекции
    pub fn skip(&self) -> u64 {
        u64::from(self.page_index - 1) * u64::from(self.page_size)
    }

    pub fn to_query(&self) -> ProductsQuery {
        ProductsQuery {
            category: self.category.name().map(str::to_string),
            limit: Some(self.page_size),
            skip: Some(self.skip()),
        }
    }
}

/// Query-параметры `GET /api/products`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
}

impl ProductsQuery {
    pub fn category_selection(&self) -> CategorySelection {
        self.category
            .as_deref()
            .map(CategorySelection::from_value)
            .unwrap_or_default()
    }

    pub fn limit_or_default(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn skip_or_default(&self) -> u64 {
        self.skip.unwrap_or(0)
    }
}
