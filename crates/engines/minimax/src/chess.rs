//! Binds the search to `chess_core`.

use chess_core::{Color, Game, Move, PieceKind};

use crate::rules::{BoardSnapshot, PieceType, RulesEngine, Side, SnapshotPiece, EMPTY_BOARD};

impl From<Color> for Side {
    fn from(c: Color) -> Self {
        match c {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }
}

impl From<PieceKind> for PieceType {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => PieceType::Pawn,
            PieceKind::Knight => PieceType::Knight,
            PieceKind::Bishop => PieceType::Bishop,
            PieceKind::Rook => PieceType::Rook,
            PieceKind::Queen => PieceType::Queen,
            PieceKind::King => PieceType::King,
        }
    }
}

// Inherent `Game` methods are called by path: several share a name with the
// trait methods and would otherwise resolve back to the trait.
impl RulesEngine for Game {
    type Move = Move;

    fn legal_moves(&mut self) -> Vec<Move> {
        Game::legal_moves(self)
    }

    fn apply_move(&mut self, mv: &Move) {
        Game::make_move(self, *mv);
    }

    fn undo_move(&mut self) {
        if Game::undo_move(self).is_none() {
            panic!("undo_move called with no move left to take back");
        }
    }

    /// Checkmate, stalemate and rule draws all end the line.
    fn is_terminal(&mut self) -> bool {
        Game::is_game_over(self)
    }

    fn side_to_move(&self) -> Side {
        Game::side_to_move(self).into()
    }

    fn snapshot_board(&self) -> BoardSnapshot {
        let mut grid = EMPTY_BOARD;
        for (i, cell) in self.position().board.iter().enumerate() {
            if let Some(pc) = cell {
                let (rank, file) = (i / 8, i % 8);
                grid[7 - rank][file] = Some(SnapshotPiece::new(pc.kind.into(), pc.color.into()));
            }
        }
        grid
    }
}

#[cfg(test)]
#[path = "chess_tests.rs"]
mod chess_tests;
