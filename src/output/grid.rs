//! Share-grid rendering
//!
//! Turns a validated chain into the shareable text block:
//!
//! ```text
//! Weaver 07/03/2024 3/3
//! ⬛⬛⬛ cat ⬛⬛⬛
//! 🟩⬜⬜ ||cot|| ||⬜🟩⬜||
//! 🟩🟩⬜ ||cog|| ||⬜🟩🟩||
//! 🟩🟩🟩 dog 🟩🟩🟩
//! ```
//!
//! Each row carries a match-count prefix (matched tiles grouped first, a
//! summary rather than a positional map) and the true positional map. Middle
//! rows hide the guess word and positional map behind `||` spoiler markers so
//! the share does not give the path away.

use crate::chain::Chain;
use crate::core::{Tile, Word};
use chrono::NaiveDate;

/// Spoiler wrapper around redacted row segments
const SPOILER: &str = "||";

/// Render the full share grid: header line plus one row per chain word
///
/// `optimal_length` is the puzzle's optimal chain length; 0 omits the
/// guesses/optimal ratio from the header.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use weaver_share::chain::validate;
/// use weaver_share::core::Word;
/// use weaver_share::output::render_grid;
///
/// let chain = validate(
///     &[Word::new("cot").unwrap(), Word::new("cog").unwrap()],
///     &Word::new("cat").unwrap(),
///     &Word::new("dog").unwrap(),
///     3,
/// )
/// .unwrap();
///
/// let grid = render_grid(&chain, 0, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
/// assert_eq!(grid.lines().count(), 5);
/// assert_eq!(grid.lines().next(), Some("Weaver 07/03/2024"));
/// ```
#[must_use]
pub fn render_grid(chain: &Chain, optimal_length: usize, today: NaiveDate) -> String {
    let mut header = format!("Weaver {}", today.format("%d/%m/%Y"));
    if optimal_length > 0 {
        header.push_str(&format!(" {}/{optimal_length}", chain.guess_count()));
    }

    let target = chain.target();
    let last = chain.len() - 1;

    let mut lines = Vec::with_capacity(chain.len() + 1);
    lines.push(header);

    for (i, word) in chain.words().iter().enumerate() {
        let filler = if i == 0 { Tile::Blocked } else { Tile::Unguessed };
        let hide_info = i != 0 && i != last;
        lines.push(render_row(word, target, filler, hide_info));
    }

    lines.join("\n")
}

/// Render a single grid row for `guess` against `target`
///
/// The row is `<count prefix> <word> <positional map>`: the prefix shows one
/// matched tile per position-match with filler tiles padding out the word
/// length, the positional map shows matches in true letter order. When
/// `hide_info` is set, the word and positional map are wrapped in spoiler
/// markers; the count prefix always stays visible.
#[must_use]
pub fn render_row(guess: &Word, target: &Word, filler: Tile, hide_info: bool) -> String {
    let matches = guess.matches_at(target);
    let matched = matches.iter().filter(|&&m| m).count();

    let mut prefix = String::with_capacity(matches.len() * 4);
    for _ in 0..matched {
        prefix.push(Tile::Matched.symbol());
    }
    for _ in matched..matches.len() {
        prefix.push(filler.symbol());
    }

    let mut positional = String::with_capacity(matches.len() * 4);
    for &hit in &matches {
        positional.push(if hit { Tile::Matched } else { filler }.symbol());
    }

    let wrap = if hide_info { SPOILER } else { "" };
    format!("{prefix} {wrap}{guess}{wrap} {wrap}{positional}{wrap}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::validate;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn cat_dog_chain() -> Chain {
        validate(
            &[word("cot"), word("cog")],
            &word("cat"),
            &word("dog"),
            3,
        )
        .unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn grid_has_header_plus_row_per_word() {
        let grid = render_grid(&cat_dog_chain(), 3, date());
        assert_eq!(grid.lines().count(), 5);
    }

    #[test]
    fn header_date_zero_padded() {
        let grid = render_grid(&cat_dog_chain(), 0, date());
        assert_eq!(grid.lines().next(), Some("Weaver 07/03/2024"));
    }

    #[test]
    fn header_includes_ratio_when_optimal_given() {
        let grid = render_grid(&cat_dog_chain(), 3, date());
        assert_eq!(grid.lines().next(), Some("Weaver 07/03/2024 3/3"));
    }

    #[test]
    fn header_omits_ratio_when_optimal_zero() {
        let grid = render_grid(&cat_dog_chain(), 0, date());
        assert_eq!(grid.lines().next(), Some("Weaver 07/03/2024"));
    }

    #[test]
    fn cat_to_dog_grid_exact() {
        let grid = render_grid(&cat_dog_chain(), 3, date());
        let expected = "Weaver 07/03/2024 3/3\n\
                        ⬛⬛⬛ cat ⬛⬛⬛\n\
                        🟩⬜⬜ ||cot|| ||⬜🟩⬜||\n\
                        🟩🟩⬜ ||cog|| ||⬜🟩🟩||\n\
                        🟩🟩🟩 dog 🟩🟩🟩";
        assert_eq!(grid, expected);
    }

    #[test]
    fn first_row_blocked_and_never_redacted() {
        let grid = render_grid(&cat_dog_chain(), 0, date());
        let first_row = grid.lines().nth(1).unwrap();
        assert!(first_row.contains('⬛'));
        assert!(!first_row.contains(SPOILER));
    }

    #[test]
    fn last_row_unguessed_filler_and_never_redacted() {
        // Target row is all matches, so use a longer example where the final
        // row still has context: with cat->dog the last row is all green.
        let grid = render_grid(&cat_dog_chain(), 0, date());
        let last_row = grid.lines().last().unwrap();
        assert_eq!(last_row, "🟩🟩🟩 dog 🟩🟩🟩");
    }

    #[test]
    fn middle_rows_redacted() {
        let grid = render_grid(&cat_dog_chain(), 0, date());
        let rows: Vec<&str> = grid.lines().skip(1).collect();
        assert!(rows[1].contains(SPOILER));
        assert!(rows[2].contains(SPOILER));
    }

    #[test]
    fn degenerate_single_word_chain() {
        let chain = validate(&[], &word("cat"), &word("cat"), 3).unwrap();
        let grid = render_grid(&chain, 0, date());

        // One header plus the single (start == target) row, fully revealed
        assert_eq!(grid.lines().count(), 2);
        assert_eq!(grid.lines().last(), Some("🟩🟩🟩 cat 🟩🟩🟩"));
    }

    #[test]
    fn row_prefix_groups_matches_first() {
        // "cog" vs "dog": matches at positions 1 and 2, prefix groups them
        let row = render_row(&word("cog"), &word("dog"), Tile::Unguessed, false);
        assert_eq!(row, "🟩🟩⬜ cog ⬜🟩🟩");
    }

    #[test]
    fn row_blocked_filler() {
        let row = render_row(&word("cat"), &word("dog"), Tile::Blocked, false);
        assert_eq!(row, "⬛⬛⬛ cat ⬛⬛⬛");
    }

    #[test]
    fn row_redaction_wraps_word_and_map() {
        let row = render_row(&word("cot"), &word("dog"), Tile::Unguessed, true);
        assert_eq!(row, "🟩⬜⬜ ||cot|| ||⬜🟩⬜||");
    }

    #[test]
    fn row_preserves_display_casing() {
        let row = render_row(&word("COT"), &word("dog"), Tile::Unguessed, false);
        assert_eq!(row, "🟩⬜⬜ COT ⬜🟩⬜");
    }
}
