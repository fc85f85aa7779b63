//! Input cleaning and display-case formatting
//!
//! Raw user input is stripped of anything that is not a letter, then given a
//! uniform display casing before it reaches the chain validator. Comparison
//! is case-insensitive either way; this only shapes what the grid shows.

/// Display casing applied to every word before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFormat {
    /// ALL CAPS (the usual share-grid look)
    #[default]
    Upper,
    /// all lowercase
    Lower,
    /// First letter capitalized
    Title,
    /// Leave the input casing untouched
    Original,
}

impl CaseFormat {
    /// Parse a format name, defaulting to `Upper` for anything unrecognized
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "lower" => Self::Lower,
            "title" => Self::Title,
            "original" | "none" => Self::Original,
            _ => Self::Upper,
        }
    }

    /// Apply this casing to a word
    #[must_use]
    pub fn apply(self, word: &str) -> String {
        match self {
            Self::Upper => word.to_uppercase(),
            Self::Lower => word.to_lowercase(),
            Self::Title => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            }
            Self::Original => word.to_string(),
        }
    }
}

/// Strip everything that is not an ASCII letter from raw input
#[must_use]
pub fn clean_word(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_alphabetic).collect()
}
