//! Board-event mechanics for Quizboard.
//!
//! Provides an unbiased random source over a byte generator, a persistent
//! no-repeat question scheduler, four-option answer shuffling, and the CPU
//! answer roll. Every routine takes its random source and its state
//! explicitly; nothing here owns global memory.

pub mod cpu;
pub mod error;
pub mod random;
pub mod scheduler;
pub mod shuffle;

pub use cpu::{CpuAccuracy, choose_cpu_answer};
pub use error::{MechError, MechResult};
pub use random::{ByteSource, ScriptedBytes, next_below, percent_chance};
pub use scheduler::{
    SchedulerState, SelectionPolicy, next_question_index_no_repeat, next_question_index_random,
};
pub use shuffle::{AnswerPresentation, AnswerSlot, shuffle_options};
