//! One-shot share command
//!
//! Cleans and case-formats the words, validates the chain, and renders the
//! grid in a single pass. The interactive mode wraps the same steps in a
//! prompt loop.

use crate::chain::validate;
use crate::core::{CaseFormat, Word, clean_word};
use crate::output::render_grid;
use chrono::NaiveDate;

/// Configuration for rendering a share grid
pub struct ShareConfig {
    pub start: String,
    pub target: String,
    pub guesses: Vec<String>,
    /// Optimal chain length for the header ratio; 0 omits it
    pub optimal_length: usize,
    pub case_format: CaseFormat,
    pub date: NaiveDate,
}

/// Result of rendering a share grid
#[derive(Debug)]
pub struct ShareResult {
    pub grid: String,
    pub guess_count: usize,
}

/// Clean, case-format, and parse one raw word
///
/// # Errors
/// Returns an error if nothing alphabetic remains after cleaning.
pub fn parse_word(raw: &str, case_format: CaseFormat) -> Result<Word, String> {
    let cleaned = case_format.apply(&clean_word(raw));
    Word::new(cleaned).map_err(|e| format!("Invalid word '{raw}': {e}"))
}

/// Check the start and target words agree on a single game length
///
/// The interactive mode runs this at the target-word prompt so a bad boundary
/// word is corrected there, not rediscovered on every guess-list attempt.
///
/// # Errors
/// Returns a human-readable reason when the lengths differ.
pub fn check_length(start: &Word, target: &Word) -> Result<(), String> {
    if start.len() == target.len() {
        Ok(())
    } else {
        Err(format!(
            "Start word '{start}' and target word '{target}' must have the same length"
        ))
    }
}

/// Validate a chain from raw input and render the share grid
///
/// # Errors
/// Returns an error if any word is unusable after cleaning or if the chain
/// fails validation. The error text is the human-readable reason; callers
/// treat it as "ask the user again", never as fatal.
pub fn share_chain(config: &ShareConfig) -> Result<ShareResult, String> {
    let start = parse_word(&config.start, config.case_format)?;
    let target = parse_word(&config.target, config.case_format)?;
    check_length(&start, &target)?;

    let guesses = config
        .guesses
        .iter()
        .map(|raw| parse_word(raw, config.case_format))
        .collect::<Result<Vec<Word>, String>>()?;

    let chain =
        validate(&guesses, &start, &target, start.len()).map_err(|e| e.to_string())?;

    Ok(ShareResult {
        guess_count: chain.guess_count(),
        grid: render_grid(&chain, config.optimal_length, config.date),
    })
}
