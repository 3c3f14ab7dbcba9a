//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// An argument is outside the range the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Scheduler state was read before its first-call initialization.
    #[error("scheduler state is not initialized")]
    UninitializedState,

    /// A produced question index fell outside the active range.
    #[error("index {index} out of range for {active_count} active questions")]
    OutOfRangeIndex {
        /// The offending index.
        index: usize,
        /// The active question count it was checked against.
        active_count: usize,
    },

    /// The byte source kept producing rejected values.
    #[error("random source rejected {attempts} draws in a row")]
    SourceExhausted {
        /// Number of consecutive rejected draws.
        attempts: u32,
    },
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
