//! Board events for Quizboard.
//!
//! Each event runs against an [`EventContext`] borrowed from a
//! [`BoardSession`]: the trivia quiz, coin reward and gamble, controller
//! and turn-order swaps, and the hidden-block toggle. The quiz schedule and
//! other per-board cells live in [`BoardRam`], which persists between
//! invocations and can be saved to disk.

pub mod board_ram;
pub mod coins;
pub mod config;
pub mod context;
pub mod error;
pub mod hidden_block;
pub mod host;
pub mod session;
pub mod swap;
pub mod trivia;

#[cfg(test)]
mod test_support;

pub use board_ram::BoardRam;
pub use coins::{CoinOutcome, run_coin_gamble, run_coin_reward};
pub use config::EventConfig;
pub use context::EventContext;
pub use error::{EventError, EventResult};
pub use hidden_block::run_hidden_block_toggle;
pub use host::{EventHost, ScriptedHost};
pub use session::{BoardEvent, BoardSession, EventOutcome, Trigger};
pub use swap::{SwapKind, SwapOutcome, run_control_swap, run_turn_order_swap};
pub use trivia::{QuizOutcome, format_question, run_trivia_quiz, sample_bank};
