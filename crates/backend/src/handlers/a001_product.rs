use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::shared::api_error::{ApiErrorBody, PRODUCTS_FETCH_FAILED};
use contracts::shared::paging::query::ProductsQuery;
use serde::Deserialize;
use serde_json::Value;

use crate::routes::AppState;

/// Query-параметры как есть: нечисловые `limit`/`skip` не отклоняют запрос,
/// а заменяются значениями по умолчанию
#[derive(Debug, Default, Deserialize)]
pub struct RawProductsQuery {
    pub category: Option<String>,
    pub limit: Option<String>,
    pub skip: Option<String>,
}

impl RawProductsQuery {
    pub fn into_query(self) -> ProductsQuery {
        ProductsQuery {
            category: self.category,
            limit: parse_number("limit", self.limit),
            skip: parse_number("skip", self.skip),
        }
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("Ignoring invalid '{}' value: {:?}", name, raw);
            None
        }
    }
}

/// GET /api/products?category=<id|all>&limit=<int>&skip=<int>
pub async fn list(
    State(state): State<AppState>,
    Query(raw): Query<RawProductsQuery>,
) -> Result<Json<Value>, (StatusCode, Json<ApiErrorBody>)> {
    let query = raw.into_query();
    match state.upstream.fetch_products(&query).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Error fetching products: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiErrorBody::new(PRODUCTS_FETCH_FAILED)),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(limit: Option<&str>, skip: Option<&str>) -> RawProductsQuery {
        RawProductsQuery {
            category: Some("laptops".to_string()),
            limit: limit.map(str::to_string),
            skip: skip.map(str::to_string),
        }
    }

    #[test]
    fn test_numeric_params_are_kept() {
        let query = raw(Some("5"), Some(" 10 ")).into_query();
        assert_eq!(query.category.as_deref(), Some("laptops"));
        assert_eq!(query.limit, Some(5));
        assert_eq!(query.skip, Some(10));
    }

    #[test]
    fn test_invalid_params_fall_back_to_defaults() {
        let query = raw(Some("abc"), Some("-3")).into_query();
        assert_eq!(query.limit, None);
        assert_eq!(query.skip, None);
        assert_eq!(query.limit_or_default(), 12);
        assert_eq!(query.skip_or_default(), 0);

        let query = RawProductsQuery::default().into_query();
        assert_eq!(query, ProductsQuery::default());
    }
}
