#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A sealed session cookie could not be opened (tampered, wrong key,
    /// expired or not ours).
    #[error("Invalid session: {0}")]
    InvalidSession(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
