//! Legal move generation.
//!
//! Moves come out in a fixed order: origin squares a1..h8, then each piece's
//! direction table in order. Callers that break ties by position in the list
//! rely on this being stable.

use crate::board::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, Position};
use crate::types::*;

const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
/// The position is played on and restored, so it is unchanged on return.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

pub fn has_legal_move(pos: &mut Position) -> bool {
    let mut buf = Vec::with_capacity(64);
    legal_moves_into(pos, &mut buf);
    !buf.is_empty()
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        let Some(pc) = pos.piece_at(from) else { continue };
        if pc.color != pos.side_to_move {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
            PieceKind::Knight => gen_steps(pos, from, pc.color, &KNIGHT_DELTAS, out),
            PieceKind::Bishop => gen_slides(pos, from, pc.color, &DIAGONALS, out),
            PieceKind::Rook => gen_slides(pos, from, pc.color, &ORTHOGONALS, out),
            PieceKind::Queen => {
                gen_slides(pos, from, pc.color, &DIAGONALS, out);
                gen_slides(pos, from, pc.color, &ORTHOGONALS, out);
            }
            PieceKind::King => {
                gen_steps(pos, from, pc.color, &KING_DELTAS, out);
                gen_castles(pos, from, pc.color, out);
            }
        }
    }
}

fn push_pawn_move(from: u8, to: u8, promo_rank: i8, out: &mut Vec<Move>) {
    if rank_of(to) == promo_rank {
        for kind in PROMOTIONS {
            let mut mv = Move::new(from, to);
            mv.promo = Some(kind);
            out.push(mv);
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let (f, r) = (file_of(from), rank_of(from));
    let (dir, start_rank, promo_rank) = match c {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    if let Some(one) = sq(f, r + dir)
        && pos.piece_at(one).is_none()
    {
        push_pawn_move(from, one, promo_rank, out);
        if r == start_rank
            && let Some(two) = sq(f, r + 2 * dir)
            && pos.piece_at(two).is_none()
        {
            out.push(Move::new(from, two));
        }
    }

    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else { continue };
        match pos.piece_at(to) {
            Some(target) if target.color != c => push_pawn_move(from, to, promo_rank, out),
            None if pos.en_passant == Some(to) => {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = true;
                out.push(mv);
            }
            _ => {}
        }
    }
}

fn gen_steps(pos: &Position, from: u8, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    let (f, r) = (file_of(from), rank_of(from));
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr)
            && pos.piece_at(to).is_none_or(|pc| pc.color != c)
        {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_slides(pos: &Position, from: u8, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    let (f0, r0) = (file_of(from), rank_of(from));
    for (df, dr) in dirs {
        let (mut f, mut r) = (f0 + df, r0 + dr);
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) => {
                    if pc.color != c {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_castles(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let (home, king_side, queen_side) = match c {
        Color::White => (4u8, pos.castling.wk, pos.castling.wq),
        Color::Black => (60u8, pos.castling.bk, pos.castling.bq),
    };
    if from != home || pos.in_check(c) {
        return;
    }
    let rook = Some(Piece::new(c, PieceKind::Rook));
    let enemy = c.other();

    // The king may not pass through or land on an attacked square.
    if king_side
        && pos.piece_at(home + 3) == rook
        && pos.piece_at(home + 1).is_none()
        && pos.piece_at(home + 2).is_none()
        && !pos.is_square_attacked(home + 1, enemy)
        && !pos.is_square_attacked(home + 2, enemy)
    {
        let mut mv = Move::new(home, home + 2);
        mv.is_castle = true;
        out.push(mv);
    }
    if queen_side
        && pos.piece_at(home - 4) == rook
        && pos.piece_at(home - 1).is_none()
        && pos.piece_at(home - 2).is_none()
        && pos.piece_at(home - 3).is_none()
        && !pos.is_square_attacked(home - 1, enemy)
        && !pos.is_square_attacked(home - 2, enemy)
    {
        let mut mv = Move::new(home, home - 2);
        mv.is_castle = true;
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
