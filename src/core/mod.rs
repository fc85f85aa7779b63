//! Core domain types for Weaver chains

pub mod case;
pub mod tile;
pub mod word;

pub use case::{CaseFormat, clean_word};
pub use tile::Tile;
pub use word::{Word, WordError};
