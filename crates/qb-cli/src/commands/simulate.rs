use std::collections::HashSet;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use qb_core::{Difficulty, PlayerRecord};
use qb_events::{BoardEvent, BoardSession, EventOutcome, ScriptedHost, Trigger};

pub fn run(
    rounds: usize,
    seed: Option<u64>,
    bank: Option<&Path>,
    config: Option<&Path>,
) -> Result<(), String> {
    let bank = super::load_bank(bank)?;
    let mut config = super::load_config(config)?;
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let players = vec![
        PlayerRecord::cpu("CPU 1", "Mario", 0, Difficulty::Easy),
        PlayerRecord::cpu("CPU 2", "Luigi", 1, Difficulty::Normal),
        PlayerRecord::cpu("CPU 3", "Peach", 2, Difficulty::Normal),
        PlayerRecord::cpu("CPU 4", "Yoshi", 3, Difficulty::Hard),
    ];
    let player_count = players.len();

    let mut session = BoardSession::new(config, bank, players)
        .map_err(|e| format!("failed to start session: {e}"))?;
    let mut host = ScriptedHost::new();
    let mut correct = vec![0usize; player_count];
    let mut asked = Vec::new();

    for _ in 0..rounds {
        for (player, hits) in correct.iter_mut().enumerate() {
            let outcome = session
                .trigger(BoardEvent::TriviaQuiz, Trigger::LandOn, player, &mut host)
                .map_err(|e| format!("quiz failed: {e}"))?;
            if let Some(EventOutcome::Quiz(quiz)) = outcome {
                asked.push(quiz.question_index);
                if quiz.correct {
                    *hits += 1;
                }
            }
        }
    }

    let distinct: HashSet<_> = asked.iter().collect();
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!(
            "({rounds} rounds, {player_count} players, seed {})",
            session.config().seed
        )
        .dimmed()
    );
    println!(
        "  {} questions asked, {} distinct of {} active",
        asked.len(),
        distinct.len(),
        session.bank().active_count()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Player",
        "Character",
        "Difficulty",
        "Correct",
        "Accuracy",
        "Coins",
    ]);

    for (player, hits) in session.players().iter().zip(&correct) {
        let accuracy = if rounds == 0 {
            "-".to_string()
        } else {
            format!("{:.0}%", *hits as f64 * 100.0 / rounds as f64)
        };
        table.add_row(vec![
            player.name.clone(),
            player.character.clone(),
            player.difficulty.to_string(),
            format!("{hits}/{rounds}"),
            accuracy,
            player.coins.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
