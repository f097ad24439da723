use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::Json;
use models::category;
use serde_json::{json, Value};
use service::errors::ServiceError;
use tracing::error;

use crate::errors::ApiError;
use crate::state::AppState;

/// `{id: type}` object used by the category and question listings.
pub(crate) fn as_map(categories: &[category::Model]) -> BTreeMap<i32, String> {
    categories.iter().map(|c| (c.id, c.r#type.clone())).collect()
}

/// GET /categories — all categories; 404 when the table is empty.
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let categories = state.trivia.list_categories().await.map_err(|e| {
        error!(err = %e, "list categories failed");
        ApiError::Internal
    })?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({
        "success": true,
        "categories": as_map(&categories),
        "all_categories": categories.len(),
    })))
}

/// GET /categories/{id}/questions — first page of the category's questions.
/// Unknown category is 404; an existing category with no questions is a
/// success with an empty list. No page parameter on this surface.
pub async fn questions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    // Non-numeric ids behave like an unmatched route
    let id: i32 = id.parse().map_err(|_| ApiError::NotFound)?;
    match state.trivia.questions_for_category(id).await {
        Ok(page) => Ok(Json(json!({
            "success": true,
            "questions": page.questions,
            "total_questions": page.total,
            "current_category": id,
        }))),
        Err(ServiceError::NotFound(_)) => Err(ApiError::NotFound),
        Err(e) => {
            error!(err = %e, category = id, "category questions failed");
            Err(ApiError::Internal)
        }
    }
}
