use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::shared::upstream::UpstreamClient;

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Каталог: прокси к источнику товаров
        .route("/api/products", get(handlers::a001_product::list))
        .route("/api/categories", get(handlers::a002_category::list))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::UpstreamConfig;
    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::Json;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    async fn spawn(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn spawn_app(upstream_base: &str) -> String {
        let upstream = UpstreamClient::new(&UpstreamConfig {
            base_url: upstream_base.to_string(),
            timeout_secs: 5,
        })
        .unwrap();
        spawn(configure_routes(AppState::new(upstream))).await
    }

    fn fake_catalog() -> Router {
        async fn all(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
            Json(json!({
                "products": [],
                "total": 194,
                "skip": params.get("skip").and_then(|s| s.parse::<u64>().ok()),
                "limit": params.get("limit").and_then(|s| s.parse::<u64>().ok()),
            }))
        }

        async fn by_category(Path(category): Path<String>) -> Json<Value> {
            Json(json!({
                "products": [{"id": 1, "title": "P", "price": 1.0, "category": category}],
                "total": 1,
                "skip": 0,
                "limit": 12,
            }))
        }

        Router::new()
            .route("/products", get(all))
            .route("/products/category/:category", get(by_category))
            .route(
                "/products/categories",
                get(|| async { Json(json!({"foo": "bar"})) }),
            )
    }

    #[tokio::test]
    async fn test_health() {
        let app = spawn_app("http://127.0.0.1:9").await;
        let body = reqwest::get(format!("{}/health", app))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_products_are_forwarded() {
        let upstream = spawn(fake_catalog()).await;
        let app = spawn_app(&upstream).await;

        let body: Value = reqwest::get(format!("{}/api/products?limit=12&skip=24", app))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["total"], 194);
        assert_eq!(body["skip"], 24);
        assert_eq!(body["limit"], 12);
    }

    #[tokio::test]
    async fn test_non_numeric_paging_uses_defaults() {
        let upstream = spawn(fake_catalog()).await;
        let app = spawn_app(&upstream).await;

        let response = reqwest::get(format!("{}/api/products?limit=abc&skip=1.5", app))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["limit"], 12);
        assert_eq!(body["skip"], 0);
    }

    #[tokio::test]
    async fn test_all_category_uses_unfiltered_collection() {
        let upstream = spawn(fake_catalog()).await;
        let app = spawn_app(&upstream).await;

        let body: Value = reqwest::get(format!("{}/api/products?category=all", app))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["total"], 194);
        assert_eq!(body["limit"], 12);
        assert_eq!(body["skip"], 0);
    }

    #[tokio::test]
    async fn test_category_scoped_products() {
        let upstream = spawn(fake_catalog()).await;
        let app = spawn_app(&upstream).await;

        let body: Value = reqwest::get(format!("{}/api/products?category=laptops", app))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["products"][0]["category"], "laptops");
    }

    #[tokio::test]
    async fn test_categories_payload_passes_through() {
        let upstream = spawn(fake_catalog()).await;
        let app = spawn_app(&upstream).await;

        let response = reqwest::get(format!("{}/api/categories", app)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"foo": "bar"}));
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_500() {
        let failing = Router::new()
            .route(
                "/products",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            )
            .route(
                "/products/categories",
                get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
            );
        let upstream = spawn(failing).await;
        let app = spawn_app(&upstream).await;

        let response = reqwest::get(format!("{}/api/products", app)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Failed to fetch products"}));

        let response = reqwest::get(format!("{}/api/categories", app)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Failed to fetch categories"}));
    }
}
