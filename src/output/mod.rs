//! Terminal output formatting
//!
//! Board rendering, tile painting, and command result display.

pub mod board;
pub mod display;
pub mod renderer;

pub use board::{render_board, share_grid};
pub use display::write_score_result;
pub use renderer::{AnsiRenderer, BoardStyle, ColorChoice, PlainRenderer, Renderer};
