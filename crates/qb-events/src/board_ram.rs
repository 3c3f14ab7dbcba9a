//! Board RAM: scratch cells that persist across event calls in one session.
//!
//! Every cell starts at zero when a game begins. Events read and write only
//! their own cells, and only while they run.

use std::fs;
use std::path::Path;

use qb_mechanics::SchedulerState;
use serde::{Deserialize, Serialize};

use crate::error::EventResult;

/// Persistent per-session cells owned by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardRam {
    /// Trivia quiz schedule.
    pub quiz: SchedulerState,
    /// Number of control or turn-order swaps performed.
    pub swap_count: u8,
    /// Whether hidden blocks are currently disabled.
    pub hidden_blocks_disabled: bool,
}

impl BoardRam {
    /// Fresh cells for a new game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every cell to its session-start value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Load cells from a JSON file.
    pub fn load(path: &Path) -> EventResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load cells from a JSON file, or start fresh if the file does not exist.
    pub fn load_or_default(path: &Path) -> EventResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write cells to a JSON file.
    pub fn save(&self, path: &Path) -> EventResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
