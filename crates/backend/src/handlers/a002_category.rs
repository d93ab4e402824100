use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_category::aggregate::CategoryDirectory;
use contracts::shared::api_error::{ApiErrorBody, CATEGORIES_FETCH_FAILED};
use serde_json::Value;

use crate::routes::AppState;

/// GET /api/categories
///
/// Ответ источника пробрасывается без изменений, фильтрация делается на клиенте.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<ApiErrorBody>)> {
    match state.upstream.fetch_categories().await {
        Ok(v) => {
            match CategoryDirectory::from_payload(&v) {
                Some(directory) if directory.is_empty() => {
                    tracing::warn!("Upstream returned no string categories")
                }
                Some(_) => {}
                None => tracing::warn!("Upstream categories payload is not an array"),
            }
            Ok(Json(v))
        }
        Err(e) => {
            tracing::error!("Error fetching categories: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiErrorBody::new(CATEGORIES_FETCH_FAILED)),
            ))
        }
    }
}
