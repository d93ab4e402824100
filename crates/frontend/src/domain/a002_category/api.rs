use contracts::domain::a002_category::aggregate::CategoryDirectory;
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_utils::api_url;
use crate::shared::fetch_error::FetchError;

/// Список категорий из сырого ответа.
///
/// Ответ, который не является массивом, даёт пустой список, а не ошибку.
pub fn categories_from_payload(payload: &Value) -> Vec<String> {
    match CategoryDirectory::from_payload(payload) {
        Some(directory) => {
            if directory.is_empty() {
                log::warn!("No valid categories found in API response");
            }
            directory.categories().to_vec()
        }
        None => {
            log::error!("Unexpected categories format: {}", payload);
            Vec::new()
        }
    }
}

/// Получить список категорий через GET /api/categories
pub async fn fetch_categories() -> Result<Vec<String>, FetchError> {
    let response = Request::get(&api_url("/api/categories"))
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let payload: Value = response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(categories_from_payload(&payload))
}

/// Загрузить справочник категорий один раз при старте.
///
/// Ошибка загрузки не показывается пользователю: справочник просто пуст,
/// в селекторе остаётся только "All Categories".
pub async fn load_directory() -> CategoryDirectory {
    match fetch_categories().await {
        Ok(names) => CategoryDirectory::from_names(names),
        Err(e) => {
            log::error!("Failed to fetch categories: {}", e);
            CategoryDirectory::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_array() {
        let payload = json!(["smartphones", "laptops"]);
        assert_eq!(categories_from_payload(&payload), vec!["smartphones", "laptops"]);
    }

    #[test]
    fn test_mixed_entries_are_filtered() {
        let payload = json!(["smartphones", {"slug": "laptops"}, 7]);
        assert_eq!(categories_from_payload(&payload), vec!["smartphones"]);
    }

    #[test]
    fn test_object_payload_is_empty() {
        let payload = json!({"foo": "bar"});
        assert!(categories_from_payload(&payload).is_empty());
    }
}
