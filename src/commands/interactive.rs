//! Interactive prompt mode
//!
//! Line-based loop: ask for the start and target words, collect guesses one
//! per line, validate, and print the share grid. Each mistake re-prompts at
//! the prompt that caused it: a bad boundary word is corrected at its own
//! prompt, a bad chain re-prompts the guess list. Nothing here is fatal.

use crate::clipboard::copy_to_clipboard;
use crate::commands::share::{ShareConfig, check_length, parse_word, share_chain};
use crate::core::{CaseFormat, Word};
use crate::output::{print_invalid_chain, print_share_result};
use chrono::NaiveDate;
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive prompt loop
///
/// `today` goes into the grid header; the caller decides what "today" means
/// so this stays testable and honest about its one date input.
///
/// # Errors
///
/// Returns an error only on I/O failure reading user input; user mistakes
/// re-prompt instead.
pub fn run_interactive(case_format: CaseFormat, today: NaiveDate) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║        Weaver Share - Interactive Mode       ║");
    println!("╚══════════════════════════════════════════════╝\n");

    println!("Enter your chain from start word to target word.");
    println!("Each step must change exactly one letter.\n");
    println!("Commands: 'quit' to exit at any prompt\n");

    loop {
        let Some(start) = prompt_boundary_word("Start word", case_format, None)? else {
            farewell();
            return Ok(());
        };
        let Some(target) = prompt_boundary_word("Target word", case_format, Some(&start))? else {
            farewell();
            return Ok(());
        };

        let Some(optimal) = prompt_optimal()? else {
            farewell();
            return Ok(());
        };

        // Re-prompt the guess list until the chain validates
        let result = loop {
            println!("\nEnter your guesses one per line (blank line or 'done' to finish):");

            let Some(guesses) = collect_guesses()? else {
                farewell();
                return Ok(());
            };

            let config = ShareConfig {
                start: start.text().to_string(),
                target: target.text().to_string(),
                guesses,
                optimal_length: optimal,
                case_format,
                date: today,
            };

            match share_chain(&config) {
                Ok(result) => break result,
                Err(reason) => {
                    print_invalid_chain(&reason);
                    println!("Let's try the guesses again.");
                }
            }
        };

        let copied = match get_user_input("Copy to clipboard? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                match copy_to_clipboard(&result.grid) {
                    Ok(()) => true,
                    Err(reason) => {
                        println!("{} {reason}", "⚠".yellow());
                        false
                    }
                }
            }
            _ => false,
        };

        print_share_result(&result, copied);

        match get_user_input("Format another chain? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                println!();
            }
            _ => {
                farewell();
                return Ok(());
            }
        }
    }
}

fn farewell() {
    println!("\n👋 Happy weaving!\n");
}

/// Prompt for a start or target word until it parses cleanly
///
/// When `paired_with` is given, the new word must also match its length, so
/// mismatched boundary words are corrected here rather than surfacing as a
/// chain error on every guess-list attempt.
///
/// Returns `None` when the user quits.
fn prompt_boundary_word(
    label: &str,
    case_format: CaseFormat,
    paired_with: Option<&Word>,
) -> Result<Option<Word>, String> {
    loop {
        let Some(input) = get_user_input(label)? else {
            return Ok(None);
        };

        if input.is_empty() {
            println!("Please enter a word.");
            continue;
        }

        let word = match parse_word(&input, case_format) {
            Ok(word) => word,
            Err(reason) => {
                println!("{reason}");
                continue;
            }
        };

        if let Some(other) = paired_with
            && let Err(reason) = check_length(other, &word)
        {
            println!("{reason}");
            continue;
        }

        return Ok(Some(word));
    }
}

/// Prompt for the optimal chain length; blank skips the header ratio
///
/// Returns `None` when the user quits.
fn prompt_optimal() -> Result<Option<usize>, String> {
    loop {
        match get_user_input("Optimal chain length (blank to skip)")? {
            None => return Ok(None),
            Some(input) if input.is_empty() => return Ok(Some(0)),
            Some(input) => match input.parse::<usize>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("Please enter a number, or leave blank."),
            },
        }
    }
}

/// Collect guesses one per line until a blank line or 'done'
///
/// Returns `None` when the user quits.
fn collect_guesses() -> Result<Option<Vec<String>>, String> {
    let mut guesses = Vec::new();

    loop {
        match get_user_input(&format!("Guess {}", guesses.len() + 1))? {
            None => return Ok(None),
            Some(input) if input.is_empty() || input == "done" => {
                return Ok(Some(guesses));
            }
            Some(input) => guesses.push(input),
        }
    }
}

/// Get user input with a prompt
///
/// Returns `None` on 'quit' or end of input.
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if bytes == 0 {
        // End of input counts as quitting
        return Ok(None);
    }

    let input = input.trim().to_string();
    if matches!(input.as_str(), "quit" | "q" | "exit") {
        return Ok(None);
    }

    Ok(Some(input))
}
