//! Chess rules engine.
//!
//! Board representation, FEN, legal move generation, make/unmake and game
//! status. Search engines drive a [`Game`] through apply/undo and never need
//! to know how the rules are implemented.

pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;
pub mod zobrist;

pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use types::*;
pub use zobrist::ZOBRIST;
