use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};
use service::pagination::parse_page;
use service::trivia::NewQuestion;
use tracing::{error, info};

use crate::errors::ApiError;
use crate::routes::{categories, coerce_int};
use crate::state::AppState;

/// GET /questions?page=N — global listing, ten per page, 404 when the
/// requested slice is empty.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let page = parse_page(params.get("page").map(String::as_str));
    let page_data = state.trivia.questions_page(page).await.map_err(|e| {
        error!(err = %e, "list questions failed");
        ApiError::Internal
    })?;
    if page_data.questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let all_categories = state.trivia.list_categories().await.map_err(|e| {
        error!(err = %e, "list categories failed");
        ApiError::Internal
    })?;
    Ok(Json(json!({
        "success": true,
        "questions": page_data.questions,
        "total_questions": page_data.total,
        "current_category": Value::Null,
        "categories": categories::as_map(&all_categories),
    })))
}

/// POST /questions — one route, two operations. A non-empty `searchTerm`
/// selects search mode; anything else is a create. Every failure on this
/// route is 422, including a search with zero hits.
pub async fn create_or_search(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    match body.get("searchTerm").and_then(Value::as_str) {
        Some(term) if !term.is_empty() => search(&state, term).await,
        _ => create(&state, &body).await,
    }
}

async fn search(state: &AppState, term: &str) -> Result<Json<Value>, ApiError> {
    let hits = state.trivia.search(term).await.map_err(|e| {
        error!(err = %e, "question search failed");
        ApiError::Unprocessable
    })?;
    // Zero matches is an error on this surface, unlike the empty
    // category listing
    if hits.is_empty() {
        return Err(ApiError::Unprocessable);
    }
    info!(count = hits.len(), "question search");
    Ok(Json(json!({
        "questions": hits,
        "total_search_questions": hits.len(),
        "current_category": "All",
    })))
}

async fn create(state: &AppState, body: &Value) -> Result<Json<Value>, ApiError> {
    let question = body
        .get("question")
        .and_then(Value::as_str)
        .ok_or(ApiError::Unprocessable)?;
    let answer = body
        .get("answer")
        .and_then(Value::as_str)
        .ok_or(ApiError::Unprocessable)?;
    let category = body
        .get("category")
        .and_then(coerce_int)
        .ok_or(ApiError::Unprocessable)?;
    let difficulty = body
        .get("difficulty")
        .and_then(coerce_int)
        .ok_or(ApiError::Unprocessable)?;

    let (created, total) = state
        .trivia
        .create(NewQuestion {
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        })
        .await
        .map_err(|e| {
            error!(err = %e, "question create failed");
            ApiError::Unprocessable
        })?;

    // The created id is deliberately not part of the response
    Ok(Json(json!({
        "success": true,
        "question": created.question,
        "answer": created.answer,
        "total_number_of_questions": total,
    })))
}

/// DELETE /questions/{id} — any failure here, a missing id included, is
/// reported as 422 rather than 404 (preserved contract quirk).
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id: i32 = id.parse().map_err(|_| ApiError::NotFound)?;
    let deleted = state.trivia.delete(id).await.map_err(|e| {
        error!(err = %e, id, "question delete failed");
        ApiError::Unprocessable
    })?;
    Ok(Json(json!({
        "success": true,
        "deleted": deleted,
    })))
}
