//! Configuration for a board session.

use qb_mechanics::{CpuAccuracy, SelectionPolicy};
use serde::{Deserialize, Serialize};

use crate::error::{EventError, EventResult};

/// Tunables shared by every event in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// RNG seed for reproducible sessions.
    pub seed: u64,
    /// Persist the quiz schedule in board RAM. When false every question is
    /// an independent draw and repeats are possible.
    pub use_board_ram: bool,
    /// Limit selection to the first N questions of the bank.
    pub active_questions: Option<usize>,
    /// Coins for a correct quiz answer.
    pub quiz_reward_coins: i32,
    /// Coins granted by the coin reward event.
    pub coin_reward: i32,
    /// Coins wagered by the coin gamble event.
    pub gamble_stake: i32,
    /// CPU accuracy per difficulty.
    pub cpu_accuracy: CpuAccuracy,
    /// Characters whose CPU players always answer correctly.
    pub forced_correct_characters: Vec<String>,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            use_board_ram: true,
            active_questions: None,
            quiz_reward_coins: 10,
            coin_reward: 5,
            gamble_stake: 10,
            cpu_accuracy: CpuAccuracy::default(),
            forced_correct_characters: Vec::new(),
        }
    }
}

impl EventConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> EventResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject negative coin amounts and accuracies outside 0-100.
    pub fn validate(&self) -> EventResult<()> {
        for (name, value) in [
            ("quiz_reward_coins", self.quiz_reward_coins),
            ("coin_reward", self.coin_reward),
            ("gamble_stake", self.gamble_stake),
        ] {
            if value < 0 {
                return Err(EventError::InvalidConfig(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        let acc = self.cpu_accuracy;
        for value in [acc.easy, acc.normal, acc.hard] {
            if !(0..=100).contains(&value) {
                return Err(EventError::InvalidConfig(format!(
                    "cpu accuracy must be within 0-100, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable the persistent quiz schedule.
    pub fn with_board_ram(mut self, enabled: bool) -> Self {
        self.use_board_ram = enabled;
        self
    }

    /// Limit selection to the first `count` questions.
    pub fn with_active_questions(mut self, count: usize) -> Self {
        self.active_questions = Some(count);
        self
    }

    /// Set the coins awarded for a correct quiz answer.
    pub fn with_quiz_reward(mut self, coins: i32) -> Self {
        self.quiz_reward_coins = coins;
        self
    }

    /// Set the CPU accuracy table.
    pub fn with_cpu_accuracy(mut self, accuracy: CpuAccuracy) -> Self {
        self.cpu_accuracy = accuracy;
        self
    }

    /// Add a character whose CPU always answers correctly.
    pub fn with_forced_correct(mut self, character: impl Into<String>) -> Self {
        self.forced_correct_characters.push(character.into());
        self
    }

    /// The question selection policy implied by `use_board_ram`.
    pub fn policy(&self) -> SelectionPolicy {
        if self.use_board_ram {
            SelectionPolicy::NoRepeat
        } else {
            SelectionPolicy::Random
        }
    }

    /// Whether CPU players using `character` always answer correctly.
    pub fn forces_correct(&self, character: &str) -> bool {
        self.forced_correct_characters
            .iter()
            .any(|c| c.eq_ignore_ascii_case(character))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EventConfig::default();
        assert_eq!(cfg.seed, 42);
        assert!(cfg.use_board_ram);
        assert_eq!(cfg.policy(), SelectionPolicy::NoRepeat);
        assert_eq!(cfg.quiz_reward_coins, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let cfg = EventConfig::default()
            .with_seed(7)
            .with_board_ram(false)
            .with_active_questions(4)
            .with_quiz_reward(3)
            .with_forced_correct("Toad");
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.policy(), SelectionPolicy::Random);
        assert_eq!(cfg.active_questions, Some(4));
        assert_eq!(cfg.quiz_reward_coins, 3);
        assert!(cfg.forces_correct("toad"));
        assert!(!cfg.forces_correct("Mario"));
    }

    #[test]
    fn from_json_fills_defaults() {
        let cfg = EventConfig::from_json(r#"{ "seed": 5, "use_board_ram": false }"#).unwrap();
        assert_eq!(cfg.seed, 5);
        assert!(!cfg.use_board_ram);
        assert_eq!(cfg.coin_reward, 5);
        assert_eq!(cfg.cpu_accuracy, CpuAccuracy::default());
    }

    #[test]
    fn from_json_rejects_bad_values() {
        assert!(EventConfig::from_json(r#"{ "coin_reward": -1 }"#).is_err());
        let too_accurate = r#"{ "cpu_accuracy": { "easy": 10, "normal": 50, "hard": 120 } }"#;
        assert!(EventConfig::from_json(too_accurate).is_err());
        assert!(matches!(
            EventConfig::from_json("nope"),
            Err(EventError::Json(_))
        ));
    }
}
