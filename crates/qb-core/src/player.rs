//! Player records as seen by board events.
//!
//! The host engine keeps one record per player. Events only touch the named
//! fields below; swaps exchange an explicit list of fields rather than
//! copying whole records.

use serde::{Deserialize, Serialize};

/// Coins a player can hold at most.
pub const MAX_COINS: i32 = 999;

/// CPU difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Weakest CPU setting.
    Easy,
    /// Default CPU setting.
    #[default]
    Normal,
    /// Strongest CPU setting.
    Hard,
}

impl Difficulty {
    /// Decode the host's raw difficulty byte. Unknown values map to `Normal`.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Easy,
            1 => Self::Normal,
            2 => Self::Hard,
            _ => Self::Normal,
        }
    }

    /// Parse a difficulty name ("easy", "normal", "hard").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "normal" => Some(Self::Normal),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Normal => write!(f, "Normal"),
            Self::Hard => write!(f, "Hard"),
        }
    }
}

/// A player's state on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Display name.
    pub name: String,
    /// The character the player is using.
    pub character: String,
    /// Controller port driving this record.
    pub controller_port: u8,
    /// Whether the record is controlled by the CPU.
    pub is_cpu: bool,
    /// CPU difficulty (ignored for humans).
    pub difficulty: Difficulty,
    /// Coins held, always within `0..=MAX_COINS`.
    pub coins: i32,
    /// Stars held.
    pub stars: u32,
    /// Position in the turn order (0 moves first).
    pub turn_order: u8,
}

impl PlayerRecord {
    /// Create a human-controlled player on the given controller port.
    pub fn human(name: impl Into<String>, character: impl Into<String>, port: u8) -> Self {
        Self {
            name: name.into(),
            character: character.into(),
            controller_port: port,
            is_cpu: false,
            difficulty: Difficulty::Normal,
            coins: 10,
            stars: 0,
            turn_order: port,
        }
    }

    /// Create a CPU-controlled player with the given difficulty.
    pub fn cpu(
        name: impl Into<String>,
        character: impl Into<String>,
        port: u8,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            is_cpu: true,
            difficulty,
            ..Self::human(name, character, port)
        }
    }

    /// Add `delta` coins, clamping to `0..=MAX_COINS`. Returns the change actually applied.
    pub fn adjust_coins(&mut self, delta: i32) -> i32 {
        let before = self.coins;
        self.coins = before.saturating_add(delta).clamp(0, MAX_COINS);
        self.coins - before
    }

    /// Exchange who controls two records: port, CPU flag, and difficulty.
    pub fn swap_control(a: &mut Self, b: &mut Self) {
        std::mem::swap(&mut a.controller_port, &mut b.controller_port);
        std::mem::swap(&mut a.is_cpu, &mut b.is_cpu);
        std::mem::swap(&mut a.difficulty, &mut b.difficulty);
    }

    /// Exchange the turn-order positions of two records.
    pub fn swap_turn_order(a: &mut Self, b: &mut Self) {
        std::mem::swap(&mut a.turn_order, &mut b.turn_order);
    }
}
