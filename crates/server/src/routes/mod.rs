pub mod categories;
pub mod questions;
pub mod quizzes;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use serde_json::Value;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::errors;
use crate::state::AppState;

/// Accept a JSON number or a numeric string for `category`, `difficulty`,
/// and the quiz category id.
pub(crate) fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Build the full application router.
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    Router::new()
        .route("/categories", get(categories::list))
        .route("/categories/:id/questions", get(categories::questions))
        .route(
            "/questions",
            get(questions::list).post(questions::create_or_search),
        )
        .route("/questions/:id", delete(questions::remove))
        .route("/quizzes", post(quizzes::next_question))
        .with_state(state)
        // One handler per error status, applied router-wide (covers the
        // router's own 404/405 and extractor rejections too)
        .layer(middleware::map_response(errors::envelope_error_responses))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
