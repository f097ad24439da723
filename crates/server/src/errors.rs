use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// API failure with the fixed error envelope
/// `{"success": false, "error": <status>, "message": <text>}`.
///
/// Messages are part of the external contract and deliberately static;
/// callers never see root causes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,
    #[error("resource not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("un-processable")]
    Unprocessable,
    #[error("Internal server error")]
    Internal,
    #[error("Bad Gateway")]
    BadGateway,
    #[error("Gateway Timeout")]
    GatewayTimeout,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway => StatusCode::BAD_GATEWAY,
            ApiError::GatewayTimeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    pub fn from_status(status: StatusCode) -> Option<Self> {
        match status {
            StatusCode::BAD_REQUEST => Some(ApiError::BadRequest),
            StatusCode::NOT_FOUND => Some(ApiError::NotFound),
            StatusCode::METHOD_NOT_ALLOWED => Some(ApiError::MethodNotAllowed),
            StatusCode::UNPROCESSABLE_ENTITY => Some(ApiError::Unprocessable),
            StatusCode::INTERNAL_SERVER_ERROR => Some(ApiError::Internal),
            StatusCode::BAD_GATEWAY => Some(ApiError::BadGateway),
            StatusCode::GATEWAY_TIMEOUT => Some(ApiError::GatewayTimeout),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

/// Normalize every error-status response (including the router's own 404
/// and 405 and extractor rejections) into the fixed envelope, so callers
/// see one shape for every failure.
pub async fn envelope_error_responses(res: Response) -> Response {
    match ApiError::from_status(res.status()) {
        Some(err) => err.into_response(),
        None => res,
    }
}
