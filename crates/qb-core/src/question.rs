//! Quiz questions and the fixed-size question bank.
//!
//! A bank holds `N` questions, of which only the first `active_count` are
//! eligible for selection. The host stores question indices in single bytes,
//! so the active count is capped at [`MAX_ACTIVE_QUESTIONS`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{QbError, QbResult};

/// Largest number of active questions a bank may expose.
pub const MAX_ACTIVE_QUESTIONS: usize = 255;

/// A single trivia question with one correct answer and three distractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text shown to the player.
    pub prompt: String,
    /// The correct answer.
    pub correct: String,
    /// The three wrong answers, in declaration order.
    pub distractors: [String; 3],
}

impl Question {
    /// Create a question from its prompt, correct answer, and distractors.
    pub fn new(
        prompt: impl Into<String>,
        correct: impl Into<String>,
        distractors: [&str; 3],
    ) -> Self {
        Self {
            prompt: prompt.into(),
            correct: correct.into(),
            distractors: distractors.map(String::from),
        }
    }

    /// All four options with the correct answer first.
    pub fn options(&self) -> [&str; 4] {
        [
            &self.correct,
            &self.distractors[0],
            &self.distractors[1],
            &self.distractors[2],
        ]
    }

    fn validate(&self, index: usize) -> QbResult<()> {
        if self.prompt.trim().is_empty() {
            return Err(QbError::InvalidBank(format!(
                "question {index} has an empty prompt"
            )));
        }
        let mut seen = HashSet::new();
        for option in self.options() {
            if option.trim().is_empty() {
                return Err(QbError::InvalidBank(format!(
                    "question {index} has an empty answer"
                )));
            }
            if !seen.insert(option) {
                return Err(QbError::InvalidBank(format!(
                    "question {index} repeats the answer \"{option}\""
                )));
            }
        }
        Ok(())
    }
}

/// On-disk shape of a question bank.
#[derive(Serialize, Deserialize)]
struct BankFile {
    questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active_count: Option<usize>,
}

/// An ordered, immutable sequence of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
    active_count: usize,
}

impl QuestionBank {
    /// Create a bank with every question active.
    ///
    /// Banks larger than [`MAX_ACTIVE_QUESTIONS`] expose only the first 255.
    pub fn new(questions: Vec<Question>) -> Self {
        let active_count = questions.len().min(MAX_ACTIVE_QUESTIONS);
        Self {
            questions,
            active_count,
        }
    }

    /// Restrict selection to the first `count` questions.
    pub fn with_active_count(mut self, count: usize) -> QbResult<Self> {
        if count == 0 || count > self.questions.len() || count > MAX_ACTIVE_QUESTIONS {
            return Err(QbError::InvalidActiveCount {
                requested: count,
                available: self.questions.len(),
            });
        }
        self.active_count = count;
        Ok(self)
    }

    /// Parse and validate a bank from JSON.
    pub fn from_json(json: &str) -> QbResult<Self> {
        let file: BankFile = serde_json::from_str(json)?;
        let bank = Self::new(file.questions);
        bank.validate()?;
        match file.active_count {
            Some(count) => bank.with_active_count(count),
            None => Ok(bank),
        }
    }

    /// Serialize the bank to pretty-printed JSON.
    pub fn to_json(&self) -> QbResult<String> {
        let active_count = (self.active_count != self.questions.len()).then_some(self.active_count);
        let file = BankFile {
            questions: self.questions.clone(),
            active_count,
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Check that the bank is non-empty and every question is well formed.
    pub fn validate(&self) -> QbResult<()> {
        if self.questions.is_empty() {
            return Err(QbError::InvalidBank("bank has no questions".into()));
        }
        for (i, q) in self.questions.iter().enumerate() {
            q.validate(i)?;
        }
        Ok(())
    }

    /// Number of questions in the bank, active or not.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if the bank holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of questions eligible for selection.
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// The active questions.
    pub fn active(&self) -> &[Question] {
        &self.questions[..self.active_count]
    }

    /// Look up an active question by index.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.active().get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| {
                Question::new(
                    format!("Question {i}?"),
                    format!("right {i}"),
                    ["wrong a", "wrong b", "wrong c"],
                )
            })
            .collect()
    }

    #[test]
    fn new_bank_is_fully_active() {
        let bank = QuestionBank::new(sample(48));
        assert_eq!(bank.len(), 48);
        assert_eq!(bank.active_count(), 48);
        assert!(!bank.is_empty());
    }

    #[test]
    fn oversized_bank_is_capped() {
        let bank = QuestionBank::new(sample(300));
        assert_eq!(bank.active_count(), MAX_ACTIVE_QUESTIONS);
    }

    #[test]
    fn active_count_restricts_lookup() {
        let bank = QuestionBank::new(sample(10)).with_active_count(4).unwrap();
        assert_eq!(bank.active().len(), 4);
        assert!(bank.get(3).is_some());
        assert!(bank.get(4).is_none());
    }

    #[test]
    fn active_count_rejects_bad_values() {
        assert!(QuestionBank::new(sample(10)).with_active_count(0).is_err());
        assert!(QuestionBank::new(sample(10)).with_active_count(11).is_err());
        let err = QuestionBank::new(sample(300))
            .with_active_count(256)
            .unwrap_err();
        assert!(matches!(
            err,
            QbError::InvalidActiveCount {
                requested: 256,
                available: 300
            }
        ));
    }

    #[test]
    fn options_put_correct_first() {
        let q = Question::new("Q?", "yes", ["no", "maybe", "never"]);
        assert_eq!(q.options(), ["yes", "no", "maybe", "never"]);
    }

    #[test]
    fn from_json_with_active_count() {
        let json = r#"{
            "questions": [
                { "prompt": "A?", "correct": "1", "distractors": ["2", "3", "4"] },
                { "prompt": "B?", "correct": "5", "distractors": ["6", "7", "8"] }
            ],
            "active_count": 1
        }"#;
        let bank = QuestionBank::from_json(json).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.active_count(), 1);
        assert_eq!(bank.get(0).unwrap().correct, "1");
    }

    #[test]
    fn json_round_trip_keeps_active_count() {
        let bank = QuestionBank::new(sample(5)).with_active_count(3).unwrap();
        let json = bank.to_json().unwrap();
        let back = QuestionBank::from_json(&json).unwrap();
        assert_eq!(back, bank);
    }

    #[test]
    fn validation_rejects_duplicate_answers() {
        let bank = QuestionBank::new(vec![Question::new("Q?", "a", ["b", "a", "c"])]);
        let err = bank.validate().unwrap_err();
        assert!(err.to_string().contains("repeats the answer"));
    }

    #[test]
    fn validation_rejects_empty_prompt_and_bank() {
        let bank = QuestionBank::new(vec![Question::new("  ", "a", ["b", "c", "d"])]);
        assert!(bank.validate().is_err());
        assert!(QuestionBank::new(Vec::new()).validate().is_err());
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let err = QuestionBank::from_json("{ not json").unwrap_err();
        assert!(matches!(err, QbError::Json(_)));
    }
}
