use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use crate::errors::AppError;
use crate::models::QueryRequest;
use crate::service::answer_service::AnswerService;

const WELCOME: &str =
    "Welcome to the Medical Chatbot API! Use /get_response for chatbot queries.";

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET `/` — liveness text
pub async fn home_handler() -> &'static str {
    WELCOME
}

/// POST `/get_response` — answers `{ "query": .. }` with catalog data or model text
pub async fn get_response_handler(
    State(svc): State<AnswerService>,
    request: Result<Json<QueryRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return rejection_response(&rejection),
    };
    match svc.answer(request).await {
        Ok(answer) => Json(answer).into_response(),
        Err(err) => error_response(&err),
    }
}

// ── Helper ────────────────────────────────────────────────────────────────────

fn error_response(err: &AppError) -> Response {
    let status = if err.is_validation() {
        warn!("Rejected query: {err}");
        StatusCode::BAD_REQUEST
    } else if err.is_agent_unavailable() {
        error!("Answering failed: {err}");
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        error!("Answering failed: {err}");
        StatusCode::BAD_GATEWAY
    };

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

/// Body that is not a JSON query object, or lacks the JSON content type.
fn rejection_response(rejection: &JsonRejection) -> Response {
    warn!("Rejected request body: {rejection}");
    (rejection.status(), Json(json!({ "error": rejection.body_text() }))).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::agent::OllamaAgentService;
    use crate::config::ServerConfig;
    use crate::routes::router;

    fn app() -> axum::Router {
        let config = ServerConfig::from_lookup(|key| {
            (key == "OLLAMA_API_BASE_URL").then(|| "http://127.0.0.1:9".to_string())
        })
        .unwrap();
        router(AnswerService::new(OllamaAgentService::new(&config).unwrap()))
    }

    fn post_query(body: &str) -> Request<Body> {
        Request::post("/get_response")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(resp: Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn home_returns_welcome_text() {
        let resp = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], WELCOME.as_bytes());
    }

    #[tokio::test]
    async fn disease_query_returns_catalog_fields() {
        let resp = app()
            .oneshot(post_query(r#"{"query": "I have a fever"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert!(body.get("response").is_none());
        assert!(body["disease_info"].as_str().unwrap().starts_with("Fever is a common symptom"));
        assert_eq!(body["doctor_recommendations"], "Sorry, no doctors found for this disease.");
    }

    #[tokio::test]
    async fn empty_query_is_bad_request() {
        let resp = app().oneshot(post_query(r#"{"query": "  "}"#)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = json_body(resp).await;
        assert_eq!(body["error"], "Field 'query' cannot be empty");
    }

    #[tokio::test]
    async fn missing_query_is_bad_request() {
        let resp = app().oneshot(post_query("{}")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unreachable_model_is_service_unavailable() {
        let resp = app().oneshot(post_query(r#"{"query": "hello"}"#)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            json_body(resp).await["error"],
            "Ollama service unavailable at http://127.0.0.1:9"
        );
    }

    #[test]
    fn inference_failure_is_bad_gateway() {
        let err = AppError::InferenceError { message: "model 'llama3.2' not found".to_string() };
        assert_eq!(error_response(&err).status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn malformed_json_gets_json_error_body() {
        let resp = app().oneshot(post_query(r#"{"query": "#)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(resp).await["error"].is_string());
    }

    #[tokio::test]
    async fn missing_content_type_gets_json_error_body() {
        let resp = app()
            .oneshot(
                Request::post("/get_response")
                    .body(Body::from(r#"{"query": "hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(json_body(resp).await["error"].is_string());
    }

    #[tokio::test]
    async fn cors_preflight_is_allowed() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/get_response")
                    .header(header::ORIGIN, "http://localhost:8080")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(resp.status().is_success());
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
