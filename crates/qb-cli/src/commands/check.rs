use std::path::Path;

use colored::Colorize;

use qb_core::MAX_ACTIVE_QUESTIONS;
use qb_mechanics::scheduler::{STRIDE_CANDIDATES, randomizes_stride};

pub fn run(bank: Option<&Path>) -> Result<(), String> {
    // loading validates
    let bank = super::load_bank(bank)?;

    println!("  {}", "All checks passed.".green());
    println!(
        "  {} questions, {} active (limit {MAX_ACTIVE_QUESTIONS})",
        bank.len(),
        bank.active_count()
    );

    let active = u8::try_from(bank.active_count()).unwrap_or(u8::MAX);
    if randomizes_stride(active) {
        println!("  Stride drawn from {STRIDE_CANDIDATES:?} each session");
    } else {
        println!(
            "  Stride fixed at 1 {}",
            "(active count is not a multiple of 16 free of factors 5 and 7)".dimmed()
        );
    }

    Ok(())
}
