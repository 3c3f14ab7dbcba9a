use std::collections::HashSet;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use qb_mechanics::scheduler::randomizes_stride;
use qb_mechanics::{SchedulerState, SelectionPolicy};

pub fn run(count: usize, calls: Option<usize>, seed: u64, random: bool) -> Result<(), String> {
    let active = u8::try_from(count)
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| format!("--count must be between 1 and 255, got {count}"))?;
    let calls = calls.unwrap_or(count * 2);
    let policy = if random {
        SelectionPolicy::Random
    } else {
        SelectionPolicy::NoRepeat
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = SchedulerState::new();
    let mut seen = HashSet::new();
    let mut repeats = 0;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Call", "Index", "Cycle", "Repeat"]);

    for call in 0..calls {
        if call % count == 0 {
            seen.clear();
        }
        let index = policy
            .next_index(&mut state, &mut rng, count)
            .map_err(|e| format!("selection failed: {e}"))?;
        let repeat = !seen.insert(index);
        if repeat {
            repeats += 1;
        }
        table.add_row(vec![
            (call + 1).to_string(),
            index.to_string(),
            (call / count + 1).to_string(),
            if repeat { "yes".into() } else { String::new() },
        ]);
    }

    println!(
        "  {} {}",
        "Schedule".bold(),
        format!("({count} questions, policy {policy}, seed {seed})").dimmed()
    );
    if state.is_initialized() {
        println!(
            "  First index {}, stride {}{}",
            state.first_index,
            state.stride,
            if randomizes_stride(active) {
                ""
            } else {
                " (fixed for this count)"
            }
        );
    }
    println!();
    println!("{table}");
    println!();

    let summary = format!("{repeats} repeat(s) within a cycle");
    if repeats == 0 {
        println!("  {}", summary.green());
    } else {
        println!("  {}", summary.yellow());
    }

    Ok(())
}
