//! Minimax Engine
//!
//! Fixed-depth minimax search with alpha-beta pruning and a material-only
//! evaluation. The search works against any [`RulesEngine`]; `chess_core`'s
//! [`chess_core::Game`] implements it out of the box.
//!
//! ```
//! use chess_core::Game;
//! use minimax_engine::select_best_move;
//!
//! let mut game = Game::new();
//! let reply = select_best_move(2, &mut game);
//! assert!(reply.is_some());
//! ```
//!
//! One search at a time per game: the search plays moves on the borrowed
//! game and takes them back before returning.

mod chess;
mod eval;
mod rules;
mod score;
mod search;

pub use eval::{evaluate_board, piece_value, Evaluator, Material};
pub use rules::{BoardSnapshot, PieceType, RulesEngine, Side, SnapshotPiece, EMPTY_BOARD};
pub use score::Score;
pub use search::{select_best_move, select_best_move_with};

/// Search depth used when the caller has no preference.
pub const DEFAULT_DEPTH: u32 = 2;
