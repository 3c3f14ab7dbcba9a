//! Borrowed view of the session handed to each event.

use rand::rngs::StdRng;

use qb_core::{PlayerRecord, QuestionBank};

use crate::board_ram::BoardRam;
use crate::config::EventConfig;
use crate::error::{EventError, EventResult};
use crate::host::EventHost;

/// Mutable context passed to an event while it runs.
pub struct EventContext<'a> {
    /// Session configuration.
    pub config: &'a EventConfig,
    /// The question bank.
    pub bank: &'a QuestionBank,
    /// All player records, indexed by player slot.
    pub players: &'a mut [PlayerRecord],
    /// Persistent scratch cells.
    pub board_ram: &'a mut BoardRam,
    /// Session random source.
    pub rng: &'a mut StdRng,
    /// Host display and input.
    pub host: &'a mut dyn EventHost,
}

impl EventContext<'_> {
    /// The player record at `index`.
    pub fn player(&self, index: usize) -> EventResult<&PlayerRecord> {
        self.players.get(index).ok_or(EventError::InvalidPlayer(index))
    }

    /// The player record at `index`, mutably.
    pub fn player_mut(&mut self, index: usize) -> EventResult<&mut PlayerRecord> {
        self.players
            .get_mut(index)
            .ok_or(EventError::InvalidPlayer(index))
    }

    /// Two distinct player records at once.
    pub fn pair_mut(
        &mut self,
        a: usize,
        b: usize,
    ) -> EventResult<(&mut PlayerRecord, &mut PlayerRecord)> {
        let len = self.players.len();
        for index in [a, b] {
            if index >= len {
                return Err(EventError::InvalidPlayer(index));
            }
        }
        if a == b {
            return Err(EventError::NotEnoughPlayers);
        }
        let (lo, hi) = (a.min(b), a.max(b));
        let (left, right) = self.players.split_at_mut(hi);
        let (first, second) = (&mut left[lo], &mut right[0]);
        if a < b {
            Ok((first, second))
        } else {
            Ok((second, first))
        }
    }
}
