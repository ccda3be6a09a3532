//! # HTTP API
//!
//! Routing for the shop API. Every path is mounted under [`API_URL`].
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  /api/v1.0/mmshop                                                       │
//! │                                                                         │
//! │  GET  /            index::index         HTML overview (optional)       │
//! │  GET  /item        item::list_items     200 [items]                    │
//! │  POST /item        item::create_item    201 item · 404 · 409           │
//! │  GET  /item/{id}   item::get_item       200 item · 404                 │
//! │  PUT  /item/{id}   item::update_item    200 item · 204 · 404           │
//! │  GET  /stats       stats::get_stats     200 {items_count, items_value} │
//! │                                                                         │
//! │  Every response: Expires / Cache-Control / Pragma no-cache headers     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod index;
pub mod item;
pub mod stats;

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ServerConfig, API_URL};
use mmshop_store::ItemRepository;

/// Shared application state.
pub struct AppState {
    pub items: ItemRepository,
    pub config: ServerConfig,
}

impl AppState {
    /// Creates state around the given repository.
    pub fn new(items: ItemRepository, config: ServerConfig) -> Self {
        AppState { items, config }
    }
}

/// State handle passed to every handler.
pub type SharedState = Arc<AppState>;

const NO_CACHE_EXPIRES: &str = "Sun, 19 Nov 1985 05:00:00 GMT";
const NO_CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate, post-check=0, pre-check=0";
const NO_CACHE_PRAGMA: &str = "no-cache";

fn api_path(suffix: &str) -> String {
    format!("{}{}", API_URL, suffix)
}

/// Creates the API router with all routes and middleware.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route(API_URL, get(index::index))
        .route(&api_path("/"), get(index::index))
        .route(
            &api_path("/item"),
            get(item::list_items).post(item::create_item),
        )
        .route(
            &api_path("/item/{id}"),
            get(item::get_item).put(item::update_item),
        )
        .route(&api_path("/stats"), get(stats::get_stats))
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static(NO_CACHE_EXPIRES),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(NO_CACHE_CONTROL),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static(NO_CACHE_PRAGMA),
        ))
        .layer(TraceLayer::new_for_http())
}

// =============================================================================
// Router Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_state(with_index: bool) -> SharedState {
        let config = ServerConfig {
            with_index,
            ..ServerConfig::default()
        };
        Arc::new(AppState::new(ItemRepository::seeded(), config))
    }

    async fn send(state: &SharedState, method: &str, path: &str, body: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(api_path(path));
        let body = match body {
            Some(raw) => {
                builder = builder.header("content-type", "application/json");
                Body::from(raw.to_string())
            }
            None => Body::empty(),
        };

        create_router(state.clone())
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        response.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_list_items() {
        let state = test_state(false);

        let response = send(&state, "GET", "/item", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_item_hides_expire() {
        let state = test_state(false);

        let response = send(&state, "GET", "/item/0", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"id": 0, "name": "cheese", "price": 2.63})
        );
    }

    #[tokio::test]
    async fn test_get_item_not_found_and_invalid_id() {
        let state = test_state(false);

        let response = send(&state, "GET", "/item/99", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "NOT_FOUND");

        let response = send(&state, "GET", "/item/abc", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "INVALID_ID");
    }

    #[tokio::test]
    async fn test_demo_scenario() {
        let state = test_state(false);

        let response = send(
            &state,
            "POST",
            "/item",
            Some(r#"{"name": "banana", "price": 0.29}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({"id": 3, "name": "banana", "price": 0.29})
        );

        let response = send(&state, "GET", "/item", None).await;
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 4);

        let response = send(
            &state,
            "PUT",
            "/item/3",
            Some(r#"{"name": "mouse", "price": 10.99}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"id": 3, "name": "mouse", "price": 10.99})
        );

        let response = send(&state, "GET", "/stats", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let stats = body_json(response).await;
        assert_eq!(stats["items_count"], 4);
        let value = stats["items_value"].as_f64().unwrap();
        assert!((value - 18.28).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let state = test_state(false);

        let response = send(
            &state,
            "POST",
            "/item",
            Some(r#"{"id": 0, "name": "x", "price": 1.0}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await["code"], "CONFLICT");
        assert_eq!(state.items.len(), 3);
    }

    #[tokio::test]
    async fn test_create_rejections_are_404() {
        let state = test_state(false);

        for body in [
            "not json",
            "[1, 2, 3]",
            r#"{"name": "banana"}"#,
            r#"{"name": "banana", "price": "cheap"}"#,
            r#"{"name": "banana", "price": 3}"#,
            r#"{"id": "abc", "name": "banana", "price": 0.29}"#,
        ] {
            let response = send(&state, "POST", "/item", Some(body)).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "body: {}", body);
        }

        assert_eq!(state.items.len(), 3);
    }

    #[tokio::test]
    async fn test_update_empty_or_unreadable_patch_is_204() {
        let state = test_state(false);

        for body in ["{}", "not json", ""] {
            let response = send(&state, "PUT", "/item/0", Some(body)).await;
            assert_eq!(response.status(), StatusCode::NO_CONTENT, "body: {}", body);
            assert!(body_bytes(response).await.is_empty());
        }

        // Body is judged before the path id
        let response = send(&state, "PUT", "/item/abc", Some("{}")).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_update_failures_are_404() {
        let state = test_state(false);
        let before = state.items.get(2).unwrap();

        let response = send(&state, "PUT", "/item/99", Some(r#"{"name": "ghost"}"#)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&state, "PUT", "/item/abc", Some(r#"{"name": "ghost"}"#)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&state, "PUT", "/item/2", Some(r#"{"price": "lots"}"#)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

        assert_eq!(state.items.get(2).unwrap(), before);
    }

    #[tokio::test]
    async fn test_method_not_allowed() {
        let state = test_state(false);

        let response = send(&state, "DELETE", "/item/0", None).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = send(&state, "PUT", "/item", Some(r#"{"name": "x"}"#)).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_no_cache_headers() {
        let state = test_state(false);

        let response = send(&state, "GET", "/stats", None).await;
        let headers = response.headers();

        assert_eq!(headers[header::EXPIRES], NO_CACHE_EXPIRES);
        assert_eq!(headers[header::CACHE_CONTROL], NO_CACHE_CONTROL);
        assert_eq!(headers[header::PRAGMA], NO_CACHE_PRAGMA);
    }

    #[tokio::test]
    async fn test_index_disabled_by_default() {
        let state = test_state(false);

        let response = send(&state, "GET", "", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_index_enabled() {
        let state = test_state(true);

        for path in ["", "/"] {
            let response = send(&state, "GET", path, None).await;
            assert_eq!(response.status(), StatusCode::OK);

            let html = String::from_utf8(body_bytes(response).await).unwrap();
            assert!(html.contains("Welcome to Mickey Mouse shop"));
            assert!(html.contains("chocolate"));
        }
    }
}
