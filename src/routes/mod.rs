pub mod api_routes;

use axum::{Router, routing::get, routing::post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::{get_response_handler, home_handler};
use crate::service::answer_service::AnswerService;

/// All routes of the answering service.
///
/// CORS is open because the chat widget is served from a different origin.
pub fn router(service: AnswerService) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/get_response", post(get_response_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
