#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown property category: {0}")]
    UnknownCategory(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
