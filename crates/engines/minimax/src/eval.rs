//! Material evaluation over a board snapshot.

use crate::rules::{BoardSnapshot, PieceType, RulesEngine, Side};
use crate::score::Score;

/// Material value of a piece. Pieces outside the table are worth nothing.
pub fn piece_value(kind: PieceType) -> i32 {
    match kind {
        PieceType::Pawn => 10,
        PieceType::Knight => 30,
        PieceType::Bishop => 30,
        PieceType::Rook => 50,
        PieceType::Queen => 90,
        PieceType::King => 900,
        PieceType::Other(_) => 0,
    }
}

/// Sums material over the board: White pieces count positive, Black
/// negative, whoever is to move.
pub fn evaluate_board(board: &BoardSnapshot) -> Score {
    let total = board
        .iter()
        .flatten()
        .flatten()
        .map(|pc| match pc.side {
            Side::White => piece_value(pc.kind),
            Side::Black => -piece_value(pc.kind),
        })
        .sum::<i32>();
    Score(total)
}

/// Leaf heuristic used by the search. Scores are from White's point of
/// view; the search flips them for the side it is choosing for.
pub trait Evaluator<R: RulesEngine + ?Sized> {
    fn evaluate(&self, rules: &R) -> Score;
}

/// Plain material count of the current board.
#[derive(Debug, Clone, Copy, Default)]
pub struct Material;

impl<R: RulesEngine + ?Sized> Evaluator<R> for Material {
    fn evaluate(&self, rules: &R) -> Score {
        evaluate_board(&rules.snapshot_board())
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
