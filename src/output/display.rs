//! Display functions for command results

use crate::commands::ShareResult;
use colored::Colorize;

/// Print a rendered share grid with surrounding chrome
///
/// The grid itself stays uncolored plain text so a terminal copy matches what
/// gets pasted elsewhere; only the chrome around it is colored.
pub fn print_share_result(result: &ShareResult, copied: bool) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("{}", result.grid);
    println!("{}", "─".repeat(40).cyan());

    let noun = if result.guess_count == 1 {
        "guess"
    } else {
        "guesses"
    };
    println!(
        "{}",
        format!("🧵 Chain complete in {} {noun}", result.guess_count)
            .green()
            .bold()
    );

    if copied {
        println!("{}", "✅ Copied to clipboard!".green().bold());
    }
    println!();
}

/// Print a validation failure
///
/// Validation failures are never fatal; the caller re-prompts.
pub fn print_invalid_chain(reason: &str) {
    println!("{} {reason}", "❌ Invalid chain:".red().bold());
}
