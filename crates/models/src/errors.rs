use thiserror::Error;

/// Entity-level input failures (empty text, out-of-range category or
/// difficulty). Store failures are reported by the service layer.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}
