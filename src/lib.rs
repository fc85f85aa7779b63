//! Weaver Share
//!
//! Validates a Weaver word chain (start word to target word, one letter changed
//! per step) and renders a shareable emoji grid.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use weaver_share::chain::validate;
//! use weaver_share::core::Word;
//! use weaver_share::output::render_grid;
//!
//! let start = Word::new("cat").unwrap();
//! let target = Word::new("dog").unwrap();
//! let guesses = vec![Word::new("cot").unwrap(), Word::new("cog").unwrap()];
//!
//! let chain = validate(&guesses, &start, &target, 3).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
//! let grid = render_grid(&chain, 3, today);
//! assert!(grid.starts_with("Weaver 07/03/2024 3/3"));
//! ```

// Core domain types
pub mod core;

// Chain validation
pub mod chain;

// Command implementations
pub mod commands;

// Grid rendering and terminal output
pub mod output;

// System clipboard
pub mod clipboard;
