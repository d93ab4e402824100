use contracts::domain::a001_product::aggregate::{Product, ProductPage};
use contracts::shared::paging::query::PageRequest;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;
use crate::shared::fetch_error::FetchError;

const PRODUCTS_PATH: &str = "/api/products";

/// Результат загрузки одной страницы
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub items: Vec<Product>,
    /// Общее количество по данным источника (только для информации)
    pub declared_total: u64,
}

impl From<ProductPage> for PageResult {
    fn from(page: ProductPage) -> Self {
        Self {
            items: page.products,
            declared_total: page.total,
        }
    }
}

/// Собрать URL страницы: `/api/products?category=..&limit=..&skip=..`
pub fn products_url(base: &str, request: &PageRequest) -> Result<String, FetchError> {
    let query = serde_qs::to_string(&request.to_query())
        .map_err(|e| FetchError::Request(format!("Failed to build query: {}", e)))?;
    Ok(format!("{}{}?{}", base, PRODUCTS_PATH, query))
}

/// Загрузить одну страницу товаров.
///
/// Без повторов: любая ошибка транспорта или статус не 2xx возвращается вызывающему.
pub async fn fetch_page(request: &PageRequest) -> Result<PageResult, FetchError> {
    let url = products_url(&api_base(), request)?;

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let page: ProductPage = response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(page.into())
}
