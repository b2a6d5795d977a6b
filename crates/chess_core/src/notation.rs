//! Coordinate move notation (`e2e4`, `e7e8q`), the form human input and
//! logs use.

use crate::board::Position;
use crate::error::MoveError;
use crate::movegen::legal_moves;
use crate::types::*;

pub fn move_to_coord(mv: Move) -> String {
    let mut s = sq_to_coord(mv.from);
    s.push_str(&sq_to_coord(mv.to));
    if let Some(kind) = mv.promo {
        s.push(kind.letter());
    }
    s
}

/// Resolves `text` against the legal moves of `pos`, so castling and
/// en-passant flags come out right. A promotion without a suffix promotes
/// to a queen.
pub fn parse_coord_move(pos: &Position, text: &str) -> Result<Move, MoveError> {
    let txt = text.trim();
    let unparsable = || MoveError::Unparsable(txt.to_string());
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return Err(unparsable());
    }
    let from = coord_to_sq(&txt[0..2]).ok_or_else(unparsable)?;
    let to = coord_to_sq(&txt[2..4]).ok_or_else(unparsable)?;
    let promo = match txt.chars().nth(4) {
        None => None,
        Some(c) => match PieceKind::from_letter(c) {
            Some(kind @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)) => {
                Some(kind)
            }
            _ => return Err(unparsable()),
        },
    };

    legal_moves(pos)
        .into_iter()
        .filter(|m| m.from == from && m.to == to)
        .find(|m| match m.promo {
            Some(kind) => kind == promo.unwrap_or(PieceKind::Queen),
            // A suffix on a move that does not promote is refused.
            None => promo.is_none(),
        })
        .ok_or_else(|| MoveError::Illegal(txt.to_string()))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
