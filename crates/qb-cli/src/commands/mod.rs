pub mod check;
pub mod play;
pub mod schedule;
pub mod simulate;

use std::fs;
use std::path::Path;

use qb_core::QuestionBank;
use qb_events::{EventConfig, sample_bank};

/// Load a question bank from `path`, or the bundled sample bank.
fn load_bank(path: Option<&Path>) -> Result<QuestionBank, String> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
            QuestionBank::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
        }
        None => sample_bank().map_err(|e| format!("bundled bank: {e}")),
    }
}

/// Load a session config from `path`, or the defaults.
fn load_config(path: Option<&Path>) -> Result<EventConfig, String> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
            EventConfig::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
        }
        None => Ok(EventConfig::default()),
    }
}
