//! Grid rendering and terminal output

pub mod display;
pub mod grid;

pub use display::{print_invalid_chain, print_share_result};
pub use grid::{render_grid, render_row};
