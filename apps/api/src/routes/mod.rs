pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;

use crate::ats::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // ATS API
        .route("/api/v1/ats/score", post(handlers::handle_score))
        .route("/api/v1/ats/policy", get(handlers::handle_policy))
        // Json's own 2 MiB default would otherwise cap bodies below the configured limit.
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn score_request(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/ats/score")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-ats");
    }

    #[tokio::test]
    async fn test_score_empty_document() {
        let (status, body) = send(app(), score_request("{}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0);
        assert_eq!(body["band"], "weak");
        let feedback = body["feedback"].as_array().unwrap();
        assert_eq!(feedback.len(), 5);
        assert!(feedback
            .iter()
            .all(|f| !f["suggestions"].as_array().unwrap().is_empty()));
    }

    #[tokio::test]
    async fn test_score_contact_and_skills() {
        let doc = json!({
            "personalInfo": {
                "fullName": "Jane Doe",
                "email": "jane@x.com",
                "phone": "555-1234",
                "location": "NYC",
                "linkedIn": "linkedin.com/in/jane"
            },
            "skills": ["python", "leadership", "sql", "teamwork"]
        });
        let (status, body) = send(app(), score_request(doc.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["feedback"][0]["category"], "Contact Information");
        assert_eq!(body["feedback"][0]["score"], 5.0);
        assert_eq!(body["feedback"][0]["suggestions"], json!([]));
        assert_eq!(body["feedback"][1]["score"], 3.5);
        // 5 + 3.5 + round(1.5) = 10.5 / 25 = 42%
        assert_eq!(body["score"], 42);
    }

    #[tokio::test]
    async fn test_score_rejects_malformed_json() {
        let (status, body) = send(app(), score_request("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_score_rejects_non_object_document() {
        let (status, body) = send(app(), score_request("\"resume\"")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_score_requires_json_content_type() {
        let request = Request::post("/api/v1/ats/score")
            .body(Body::from("{}"))
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_score_rejects_oversized_body() {
        let config = Config {
            max_body_bytes: 64,
            ..Config::default()
        };
        let app = build_router(AppState::new(config));
        let payload = json!({ "skills": vec!["rust"; 40] }).to_string();
        let request = Request::post("/api/v1/ats/score")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, payload.len())
            .body(Body::from(payload))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_score_accepts_body_above_extractor_default() {
        let config = Config {
            max_body_bytes: 4 * 1024 * 1024,
            ..Config::default()
        };
        let app = build_router(AppState::new(config));
        let summary = "x".repeat(3 * 1024 * 1024);
        let payload = json!({ "personalInfo": { "summary": summary } }).to_string();
        let request = Request::post("/api/v1/ats/score")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, payload.len())
            .body(Body::from(payload))
            .unwrap();
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        // personal info present (0.75) + summary 1.0 rounds to 2 of 25 → 8
        assert_eq!(body["feedback"][4]["score"], 2.0);
        assert_eq!(body["score"], 8);
    }

    #[tokio::test]
    async fn test_policy_view() {
        let request = Request::get("/api/v1/ats/policy")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["raw_max"], 25.0);
        assert_eq!(body["scale"]["pass_threshold"], 4.0);
        assert!(body["technical_keywords"]
            .as_array()
            .unwrap()
            .contains(&json!("python")));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let request = Request::get("/api/v1/nope").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
