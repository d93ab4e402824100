use contracts::domain::a002_category::aggregate::CategorySelection;
use contracts::shared::paging::query::ProductsQuery;
use serde_json::Value;
use thiserror::Error;

use crate::shared::config::UpstreamConfig;

/// Ошибки обращения к источнику каталога
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("API responded with status {0}")]
    Status(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid JSON from upstream: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            UpstreamError::Decode(e.to_string())
        } else {
            UpstreamError::Transport(e.to_string())
        }
    }
}

/// HTTP-клиент для REST-источника товаров (dummyjson-совместимый API)
///
/// Ответы не интерпретируются: JSON возвращается как есть, разбор и
/// санитизация выполняются на клиенте.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL страницы товаров: вся коллекция или коллекция категории
    pub fn products_url(&self, category: &CategorySelection) -> String {
        match category.name() {
            None => format!("{}/products", self.base_url),
            Some(name) => format!(
                "{}/products/category/{}",
                self.base_url,
                urlencoding::encode(name)
            ),
        }
    }

    pub fn categories_url(&self) -> String {
        format!("{}/products/categories", self.base_url)
    }

    /// Получить страницу товаров через GET /products[/category/:id]?limit&skip
    pub async fn fetch_products(&self, query: &ProductsQuery) -> Result<Value, UpstreamError> {
        let url = self.products_url(&query.category_selection());
        let params = [
            ("limit", query.limit_or_default().to_string()),
            ("skip", query.skip_or_default().to_string()),
        ];

        tracing::debug!("GET {} {:?}", url, params);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(&params)
            .send()
            .await?;

        Self::read_json(response).await
    }

    /// Получить список категорий через GET /products/categories
    pub async fn fetch_categories(&self) -> Result<Value, UpstreamError> {
        let url = self.categories_url();

        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str::<Value>(&body).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}
