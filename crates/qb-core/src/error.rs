/// Alias for `Result<T, QbError>`.
pub type QbResult<T> = Result<T, QbError>;

/// Errors that can occur when building or loading core data.
#[derive(Debug, thiserror::Error)]
pub enum QbError {
    /// A question bank failed validation.
    #[error("invalid question bank: {0}")]
    InvalidBank(String),

    /// The requested number of active questions is not usable for this bank.
    #[error(
        "invalid active question count {requested} (bank holds {available}, at most 255 allowed)"
    )]
    InvalidActiveCount {
        /// The requested active count.
        requested: usize,
        /// The number of questions in the bank.
        available: usize,
    },

    /// A bank file could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
