//! Command implementations

pub mod interactive;
pub mod share;

pub use interactive::run_interactive;
pub use share::{ShareConfig, ShareResult, share_chain};
