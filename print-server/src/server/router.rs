use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use super::api;
use crate::app::SharedState;

/// Room for JSON framing around the Base64 image.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    let body_limit = body_limit(state.config().max_image_bytes);

    Router::new()
        // --- Core ---
        .route("/status", get(status_handler))
        // --- Printing ---
        .route("/api/mobile/print", post(api::print::print_label))
        .route("/api/mobile/print/raw", post(api::print::print_label_raw))
        // --- Middleware ---
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Request body limit for a decoded image limit of `max_image_bytes`.
fn body_limit(max_image_bytes: usize) -> usize {
    max_image_bytes.div_ceil(3) * 4 + BODY_OVERHEAD_BYTES
}

async fn status_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn post_print(config: AppConfig, content_type: Option<&str>, body: String) -> (StatusCode, Value) {
        let app = create_router(SharedState::new(config));
        let mut request = Request::builder().method("POST").uri("/api/mobile/print");
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        let response = app
            .oneshot(request.body(Body::from(body)).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn body_limit_covers_base64_expansion() {
        assert_eq!(body_limit(3), 4 + BODY_OVERHEAD_BYTES);
        assert_eq!(body_limit(10 * 1024 * 1024), 13_981_016 + BODY_OVERHEAD_BYTES);
    }

    #[tokio::test]
    async fn status_reports_ok() {
        let axum::Json(body) = status_handler().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], "1.0.0");
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let (status, body) =
            post_print(AppConfig::default(), Some("application/json"), "{\"labelType\":".into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn unknown_label_type_is_bad_request() {
        let payload = r#"{"labelType":"shipping","image":"AAAA","label":{"widthMm":50,"heightMm":30}}"#;
        let (status, body) = post_print(AppConfig::default(), Some("application/json"), payload.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn missing_content_type_is_bad_request() {
        let (status, body) = post_print(AppConfig::default(), None, "{}".into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn body_over_limit_is_rejected() {
        let config = AppConfig {
            max_image_bytes: 3,
            ..AppConfig::default()
        };
        let payload = format!(
            r#"{{"labelType":"menu","image":"{}","label":{{"widthMm":50,"heightMm":30}}}}"#,
            "A".repeat(body_limit(3) + 1)
        );
        let (status, body) = post_print(config, Some("application/json"), payload).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["status"], "error");
    }
}
