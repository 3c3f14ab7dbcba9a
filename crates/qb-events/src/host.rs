//! The host engine's API as seen by events.

use std::collections::VecDeque;

use qb_core::PlayerRecord;

/// Display and input services supplied by the host engine.
pub trait EventHost {
    /// Show a message and wait for it to be acknowledged.
    fn show_message(&mut self, text: &str);

    /// Ask `player` to pick one of four options and return the chosen slot.
    ///
    /// For CPU players `cpu_choice` carries the slot the CPU decided on;
    /// hosts should return it.
    fn present_choice(
        &mut self,
        player: &PlayerRecord,
        prompt: &str,
        options: &[String; 4],
        cpu_choice: Option<usize>,
    ) -> usize;
}

/// An in-memory host that records messages and replays queued answers.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHost {
    /// Every message shown, in order.
    pub messages: Vec<String>,
    /// Every prompt presented, in order.
    pub prompts: Vec<String>,
    answers: VecDeque<usize>,
}

impl ScriptedHost {
    /// Create a host with no queued answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host that answers human prompts from `answers` in order.
    pub fn with_answers(answers: impl IntoIterator<Item = usize>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// The most recent message, if any.
    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl EventHost for ScriptedHost {
    fn show_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn present_choice(
        &mut self,
        _player: &PlayerRecord,
        prompt: &str,
        _options: &[String; 4],
        cpu_choice: Option<usize>,
    ) -> usize {
        self.prompts.push(prompt.to_string());
        match cpu_choice {
            Some(choice) => choice,
            None => self.answers.pop_front().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> [String; 4] {
        ["a", "b", "c", "d"].map(String::from)
    }

    #[test]
    fn replays_answers_then_defaults() {
        let player = PlayerRecord::human("P1", "Mario", 0);
        let mut host = ScriptedHost::with_answers([2, 3]);
        assert_eq!(host.present_choice(&player, "Q?", &options(), None), 2);
        assert_eq!(host.present_choice(&player, "Q?", &options(), None), 3);
        assert_eq!(host.present_choice(&player, "Q?", &options(), None), 0);
        assert_eq!(host.prompts.len(), 3);
    }

    #[test]
    fn cpu_choice_wins() {
        let player = PlayerRecord::human("P1", "Mario", 0);
        let mut host = ScriptedHost::with_answers([2]);
        assert_eq!(host.present_choice(&player, "Q?", &options(), Some(1)), 1);
        // queued answer untouched
        assert_eq!(host.present_choice(&player, "Q?", &options(), None), 2);
    }

    #[test]
    fn records_messages() {
        let mut host = ScriptedHost::new();
        assert!(host.last_message().is_none());
        host.show_message("hello");
        host.show_message("bye");
        assert_eq!(host.last_message(), Some("bye"));
        assert_eq!(host.messages.len(), 2);
    }
}
