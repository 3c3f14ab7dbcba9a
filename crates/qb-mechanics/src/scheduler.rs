//! No-repeat question scheduling over persistent board RAM.
//!
//! A session picks a random first index and a stride once, then walks
//! `first + k * stride (mod active_count)`. When the stride is coprime with the
//! active count every question is asked exactly once before the cycle
//! restarts. The state lives in three host-owned byte cells; `stride == 0`
//! marks a session that has not drawn its parameters yet. `asked_count` is
//! kept as the position within the current cycle, so it never needs to wrap
//! past a byte.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};
use crate::random::{ByteSource, next_below};

/// Strides a session may draw from when the active count allows it.
///
/// For active counts divisible by 16 but not by 5 or 7, each of these is
/// coprime with the count.
pub const STRIDE_CANDIDATES: [u8; 3] = [1, 5, 7];

/// Whether the stride is drawn from [`STRIDE_CANDIDATES`] for this active count.
/// Other counts always step by 1.
pub fn randomizes_stride(active_count: u8) -> bool {
    active_count % 16 == 0 && active_count % 5 != 0 && active_count % 7 != 0
}

fn gcd(mut a: u8, mut b: u8) -> u8 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn checked_active_count(active_count: usize) -> MechResult<u8> {
    match u8::try_from(active_count) {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(MechError::InvalidArgument(format!(
            "active question count must be in 1..=255, got {active_count}"
        ))),
    }
}

/// Persistent scheduler cells for one game session.
///
/// All-zero (the [`Default`]) is the session-start value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerState {
    /// Index of the first question asked this session.
    pub first_index: u8,
    /// Questions asked in the current cycle, always below the active count.
    pub asked_count: u8,
    /// Step between consecutive indices; 0 means not yet initialized.
    pub stride: u8,
}

impl SchedulerState {
    /// A fresh, uninitialized state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the session parameters have been drawn.
    pub fn is_initialized(&self) -> bool {
        self.stride != 0
    }

    /// Draw the first index and the stride for a new session.
    ///
    /// The first index is drawn before the stride. All three cells are
    /// written together, and only after both draws succeed.
    pub fn initialize<B: ByteSource + ?Sized>(
        &mut self,
        src: &mut B,
        active_count: usize,
    ) -> MechResult<()> {
        let count = checked_active_count(active_count)?;
        let first_index = next_below(src, u32::from(count))?;
        let stride = if randomizes_stride(count) {
            STRIDE_CANDIDATES[usize::from(next_below(src, 3)?)]
        } else {
            1
        };

        *self = Self {
            first_index,
            asked_count: 0,
            stride,
        };
        tracing::debug!(first_index, stride, active_count, "question scheduler initialized");
        Ok(())
    }

    /// The index the next call would return, without advancing.
    ///
    /// A state drawn for a different active count reports
    /// [`MechError::UninitializedState`], since the next call redraws it.
    pub fn peek_next(&self, active_count: usize) -> MechResult<u8> {
        let count = checked_active_count(active_count)?;
        if !self.is_initialized() || !self.fits(count) {
            return Err(MechError::UninitializedState);
        }
        Ok(self.index_for(count))
    }

    /// Whether the stored parameters still give a full cycle over `count`
    /// questions. Board RAM resumed against another bank may not.
    pub fn fits(&self, count: u8) -> bool {
        self.first_index < count && gcd(self.stride, count) == 1
    }

    /// Return every cell to its session-start value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn index_for(&self, count: u8) -> u8 {
        let offset = u32::from(self.asked_count) * u32::from(self.stride);
        ((u32::from(self.first_index) + offset) % u32::from(count)) as u8
    }
}

/// Next question index with no repeats until every active question was asked.
///
/// Initializes `state` on the first call of a session.
pub fn next_question_index_no_repeat<B: ByteSource + ?Sized>(
    state: &mut SchedulerState,
    src: &mut B,
    active_count: usize,
) -> MechResult<u8> {
    let count = checked_active_count(active_count)?;
    if state.is_initialized() && !state.fits(count) {
        tracing::debug!(?state, active_count, "stored schedule does not fit, redrawing");
        state.reset();
    }
    if !state.is_initialized() {
        state.initialize(src, active_count)?;
    }

    let index = state.index_for(count);
    if index >= count {
        return Err(MechError::OutOfRangeIndex {
            index: usize::from(index),
            active_count,
        });
    }
    state.asked_count = ((u16::from(state.asked_count) + 1) % u16::from(count)) as u8;
    tracing::debug!(index, asked = state.asked_count, "scheduled question");
    Ok(index)
}

/// Independent uniform pick per call; repeats are possible.
pub fn next_question_index_random<B: ByteSource + ?Sized>(
    src: &mut B,
    active_count: usize,
) -> MechResult<u8> {
    let count = checked_active_count(active_count)?;
    next_below(src, u32::from(count))
}

/// How an event picks its next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Walk the persistent schedule; requires board RAM.
    #[default]
    NoRepeat,
    /// Draw independently each time; used when board RAM is unavailable.
    Random,
}

impl SelectionPolicy {
    /// Pick the next question index under this policy.
    ///
    /// `Random` never reads or writes `state`.
    pub fn next_index<B: ByteSource + ?Sized>(
        self,
        state: &mut SchedulerState,
        src: &mut B,
        active_count: usize,
    ) -> MechResult<u8> {
        match self {
            Self::NoRepeat => next_question_index_no_repeat(state, src, active_count),
            Self::Random => next_question_index_random(src, active_count),
        }
    }
}

impl std::fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRepeat => write!(f, "no-repeat"),
            Self::Random => write!(f, "random"),
        }
    }
}
