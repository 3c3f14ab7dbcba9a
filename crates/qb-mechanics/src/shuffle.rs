//! Four-option answer shuffling.
//!
//! Options are placed one slot at a time: every option still in play gets a
//! fresh random byte key, and the largest key takes the next slot. Ties go to
//! the option declared first (correct answer, then distractors in order).

use serde::{Deserialize, Serialize};

use crate::random::{ByteSource, argmax_first};

/// One displayed answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSlot {
    /// Answer text.
    pub text: String,
    /// Whether this is the correct answer.
    pub is_correct: bool,
}

/// The shuffled answers for one question display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPresentation {
    /// Answers in display order.
    pub slots: [AnswerSlot; 4],
    /// Slot holding the correct answer.
    pub correct_slot: usize,
}

impl AnswerPresentation {
    /// Answer texts in display order.
    pub fn texts(&self) -> [String; 4] {
        self.slots.clone().map(|slot| slot.text)
    }

    /// Text of the correct answer.
    pub fn correct_text(&self) -> &str {
        &self.slots[self.correct_slot].text
    }

    /// Whether `choice` is the correct slot.
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_slot
    }
}

/// Shuffle one correct answer and three distractors into display order.
pub fn shuffle_options<B: ByteSource + ?Sized>(
    src: &mut B,
    correct: &str,
    wrong1: &str,
    wrong2: &str,
    wrong3: &str,
) -> AnswerPresentation {
    let declared = [correct, wrong1, wrong2, wrong3];

    // declaration indices still waiting for a slot
    let mut remaining: Vec<usize> = (0..declared.len()).collect();
    let mut order = [0usize; 4];
    for slot in order.iter_mut().take(3) {
        let keys: Vec<u8> = remaining.iter().map(|_| src.next_byte()).collect();
        *slot = remaining.remove(argmax_first(&keys));
    }
    order[3] = remaining[0];

    let correct_slot = order.iter().position(|&i| i == 0).unwrap_or(0);
    let slots = order.map(|i| AnswerSlot {
        text: declared[i].to_string(),
        is_correct: i == 0,
    });

    AnswerPresentation {
        slots,
        correct_slot,
    }
}
