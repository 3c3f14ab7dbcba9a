//! CPU answer selection.

use qb_core::Difficulty;
use serde::{Deserialize, Serialize};

use crate::random::{ByteSource, percent_chance};

/// Highest valid answer slot.
pub const MAX_SLOT: usize = 3;

/// Per-difficulty chance (in percent) that a CPU answers correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuAccuracy {
    /// Accuracy for Easy CPUs.
    pub easy: i32,
    /// Accuracy for Normal CPUs.
    pub normal: i32,
    /// Accuracy for Hard CPUs.
    pub hard: i32,
}

impl Default for CpuAccuracy {
    fn default() -> Self {
        Self {
            easy: 40,
            normal: 65,
            hard: 90,
        }
    }
}

impl CpuAccuracy {
    /// Accuracy percent for a difficulty level.
    pub fn for_difficulty(&self, difficulty: Difficulty) -> i32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Pick the slot a CPU player answers with.
///
/// The accuracy roll is always drawn. A hit, or `force_correct`, answers
/// `correct_slot`; a miss answers `(correct_slot + 1) % 3`, never a random
/// wrong slot.
pub fn choose_cpu_answer<B: ByteSource + ?Sized>(
    src: &mut B,
    correct_slot: usize,
    difficulty: Difficulty,
    accuracy_percent: i32,
    force_correct: bool,
) -> usize {
    let correct_slot = if correct_slot > MAX_SLOT {
        tracing::warn!(correct_slot, "correct slot out of range, using slot 0");
        0
    } else {
        correct_slot
    };

    let hit = percent_chance(src, accuracy_percent);
    let choice = if hit || force_correct {
        correct_slot
    } else {
        // misses only ever land in slots 0-2
        (correct_slot + 1) % 3
    };
    tracing::debug!(%difficulty, accuracy_percent, hit, force_correct, choice, "cpu answer");
    choice
}
