//! Terminal chess
//!
//! Play a friend at the same keyboard or take on the minimax engine.

pub mod config;
pub mod controller;
pub mod render;

pub use config::{Mode, PlayConfig, PlaySide};
pub use controller::{Command, GameController, PlayError};
pub use render::render_board;
