//! Core types for Quizboard: questions, question banks, and player records.
//!
//! This crate defines the data the board events operate on. It knows nothing
//! about randomness or the host engine; a [`QuestionBank`] can be built
//! programmatically or deserialized from JSON.

/// Error types used throughout the crate.
pub mod error;
/// Player records, difficulty levels, and field-level swaps.
pub mod player;
/// Quiz questions and the fixed-size question bank.
pub mod question;

/// Re-export error types.
pub use error::{QbError, QbResult};
/// Re-export player types.
pub use player::{Difficulty, MAX_COINS, PlayerRecord};
/// Re-export question types.
pub use question::{MAX_ACTIVE_QUESTIONS, Question, QuestionBank};
