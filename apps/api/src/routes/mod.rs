pub mod health;
pub mod index;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/extract", post(handlers::handle_extract))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::extraction::TesseractCliEngine;
    use crate::llm_client::LlmClient;
    use crate::upload::UploadSlot;

    fn test_state() -> AppState {
        AppState {
            llm: LlmClient::new("test-key".to_string()),
            uploads: Arc::new(UploadSlot::new().unwrap()),
            ocr: Arc::new(TesseractCliEngine),
            config: Config {
                gemini_api_key: "test-key".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                max_upload_bytes: 1024 * 1024,
            },
        }
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let app = build_router(test_state());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 4096).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-api");
    }

    #[tokio::test]
    async fn test_index_serves_the_page() {
        let app = build_router(test_state());

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_without_body_is_rejected() {
        let app = build_router(test_state());

        let response = app
            .oneshot(Request::post("/api/v1/analyze").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }
}
