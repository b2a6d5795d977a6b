//! Errors surfaced at the rules-engine boundary.

use thiserror::Error;

/// Reasons a FEN string can be rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 fields, found {0}")]
    FieldCount(usize),
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },
    #[error("invalid piece character '{0}'")]
    Piece(char),
    #[error("invalid side to move '{0}'")]
    SideToMove(String),
    #[error("invalid castling character '{0}'")]
    Castling(char),
    #[error("invalid en-passant square '{0}'")]
    EnPassant(String),
    #[error("invalid move counter '{0}'")]
    Counter(String),
}

/// Reasons a move request from outside the search can be refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("cannot read '{0}' as a move (expected e.g. e2e4 or e7e8q)")]
    Unparsable(String),
    #[error("{0} is not a legal move")]
    Illegal(String),
    #[error("the game is over")]
    GameOver,
    #[error("no move to take back")]
    NothingToUndo,
}
