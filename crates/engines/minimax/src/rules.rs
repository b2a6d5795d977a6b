//! The capabilities the search needs from a rules engine.
//!
//! The search owns no position of its own. It borrows the caller's rules
//! engine mutably for one top-level call, asks it for moves and board
//! snapshots, and plays moves on it with strictly paired apply/undo calls.

use std::fmt::Debug;

/// The two players. White's material counts positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// Piece vocabulary of the evaluator. A rules engine with pieces the
/// evaluator has no value for reports them as `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Other(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SnapshotPiece {
    pub kind: PieceType,
    pub side: Side,
}

impl SnapshotPiece {
    pub fn new(kind: PieceType, side: Side) -> Self {
        Self { kind, side }
    }
}

/// `[row][column]`, row 0 is the far rank from White (rank 8), column 0 is
/// the a-file.
pub type BoardSnapshot = [[Option<SnapshotPiece>; 8]; 8];

pub const EMPTY_BOARD: BoardSnapshot = [[None; 8]; 8];

/// A game the search can explore in place.
///
/// Implementations must make `undo_move` reverse the latest `apply_move`
/// exactly, including any history used by `is_terminal`.
pub trait RulesEngine {
    type Move: Clone + Debug;

    /// Every legal move for the side to move. The order decides which move
    /// wins a tie, so it must be deterministic.
    fn legal_moves(&mut self) -> Vec<Self::Move>;

    /// Plays a move previously returned by `legal_moves`.
    fn apply_move(&mut self, mv: &Self::Move);

    /// Takes back the latest `apply_move`.
    fn undo_move(&mut self);

    /// The game has ended here. Covers "no legal moves"; implementations may
    /// also report rule draws.
    fn is_terminal(&mut self) -> bool {
        self.legal_moves().is_empty()
    }

    fn side_to_move(&self) -> Side;

    fn snapshot_board(&self) -> BoardSnapshot;
}
