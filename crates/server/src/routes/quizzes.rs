use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use service::errors::ServiceError;
use tracing::error;

use crate::errors::ApiError;
use crate::routes::coerce_int;
use crate::state::AppState;

/// POST /quizzes — body `{quiz_category: {id}, previous_questions: [ids]}`.
/// Returns a random question that has not been asked yet, or
/// `question: null` with `forceEnd: true` when the category is exhausted.
pub async fn next_question(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    // A missing category id or previous list is an unhandled failure
    // (500 envelope), not a validation error
    let category_id = body
        .get("quiz_category")
        .and_then(|c| c.get("id"))
        .and_then(coerce_int)
        .ok_or(ApiError::Internal)?;
    let previous: Vec<i32> = body
        .get("previous_questions")
        .and_then(Value::as_array)
        .ok_or(ApiError::Internal)?
        .iter()
        .filter_map(coerce_int)
        .filter_map(|id| i32::try_from(id).ok())
        .collect();

    match state.trivia.quiz_question(category_id, &previous).await {
        Ok(pick) => Ok(Json(json!({
            "success": true,
            "question": pick.question,
            "forceEnd": pick.force_end,
        }))),
        Err(ServiceError::NotFound(_)) => Err(ApiError::NotFound),
        Err(e) => {
            error!(err = %e, category = category_id, "quiz selection failed");
            Err(ApiError::Internal)
        }
    }
}
