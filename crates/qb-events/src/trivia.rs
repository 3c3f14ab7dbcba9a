//! Trivia quiz event.
//!
//! The landing player is asked one question from the bank. The question is
//! picked by the session's selection policy, its answers are shuffled, and a
//! CPU player answers with an accuracy roll. A correct answer earns coins.

use qb_core::{QbError, QbResult, Question, QuestionBank};
use qb_mechanics::{AnswerPresentation, choose_cpu_answer, shuffle_options};
use serde::{Deserialize, Serialize};

use crate::context::EventContext;
use crate::error::EventResult;

const SAMPLE_BANK: &str = include_str!("../data/trivia.json");

/// The bundled sample bank of Nintendo trivia.
pub fn sample_bank() -> QbResult<QuestionBank> {
    QuestionBank::from_json(SAMPLE_BANK)
}

/// What happened during one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    /// Index of the question asked.
    pub question_index: usize,
    /// The shuffled answers as displayed.
    pub presentation: AnswerPresentation,
    /// Slot the player chose.
    pub chosen: usize,
    /// Whether the choice was correct.
    pub correct: bool,
    /// Coins actually added to the player.
    pub coins_awarded: i32,
}

/// Build the question message: header, prompt, and numbered answers.
pub fn format_question(question_number: usize, prompt: &str, options: &[String; 4]) -> String {
    let mut text = format!("Question {question_number}\n{prompt}");
    for (i, option) in options.iter().enumerate() {
        text.push_str(&format!("\n  {}. {option}", i + 1));
    }
    text
}

/// Run the trivia quiz for the player at `player_index`.
pub fn run_trivia_quiz(
    ctx: &mut EventContext<'_>,
    player_index: usize,
) -> EventResult<QuizOutcome> {
    let config = ctx.config;
    let bank = ctx.bank;
    let player = ctx.player(player_index)?.clone();
    let active_count = bank.active_count();

    let question_index = match config
        .policy()
        .next_index(&mut ctx.board_ram.quiz, ctx.rng, active_count)
    {
        Ok(index) => usize::from(index),
        Err(err) => {
            tracing::warn!(%err, "question selection failed, asking question 0");
            0
        }
    };
    let question: &Question = bank
        .get(question_index)
        .or_else(|| bank.get(0))
        .ok_or_else(|| QbError::InvalidBank("bank has no active questions".into()))?;

    let presentation = shuffle_options(
        ctx.rng,
        &question.correct,
        &question.distractors[0],
        &question.distractors[1],
        &question.distractors[2],
    );

    let cpu_choice = if player.is_cpu {
        let accuracy = config.cpu_accuracy.for_difficulty(player.difficulty);
        let forced = config.forces_correct(&player.character);
        Some(choose_cpu_answer(
            ctx.rng,
            presentation.correct_slot,
            player.difficulty,
            accuracy,
            forced,
        ))
    } else {
        None
    };

    let texts = presentation.texts();
    let prompt = format_question(question_index + 1, &question.prompt, &texts);
    let mut chosen = ctx.host.present_choice(&player, &prompt, &texts, cpu_choice);
    if chosen >= texts.len() {
        tracing::warn!(chosen, "answer slot out of range, using slot 0");
        chosen = 0;
    }

    let correct = presentation.is_correct(chosen);
    let coins_awarded = if correct {
        let applied = ctx
            .player_mut(player_index)?
            .adjust_coins(config.quiz_reward_coins);
        ctx.host.show_message(&format!(
            "That's right, {}! You win {applied} coins.",
            player.name
        ));
        applied
    } else {
        ctx.host.show_message(&format!(
            "Sorry, {}. The answer was {}.",
            player.name,
            presentation.correct_text()
        ));
        0
    };

    tracing::debug!(
        player = %player.name,
        question_index,
        chosen,
        correct,
        "trivia quiz resolved"
    );

    Ok(QuizOutcome {
        question_index,
        presentation,
        chosen,
        correct,
        coins_awarded,
    })
}
