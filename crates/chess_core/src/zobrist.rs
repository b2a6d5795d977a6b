//! Zobrist keys used to recognise repeated positions.
//!
//! Two positions share a key when they have the same pieces on the same
//! squares, the same side to move, the same castling rights and the same
//! en-passant file. Move counters are deliberately not part of the key.

use crate::board::Position;
use crate::types::{Color, Piece, file_of};

pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pieces: [[[u64; 64]; 6]; 2],
    black_to_move: u64,
    /// [wk, wq, bk, bq]
    castling: [u64; 4],
    /// One key per en-passant file
    en_passant: [u64; 8],
}

impl ZobristKeys {
    /// Fills the tables from a fixed-seed xorshift64 stream.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x9E37_79B9_7F4A_7C15u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut i = 0;
        while i < 2 * 6 * 64 {
            state = xorshift64(state);
            pieces[i / 384][(i / 64) % 6][i % 64] = state;
            i += 1;
        }

        state = xorshift64(state);
        let black_to_move = state;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            state = xorshift64(state);
            castling[i] = state;
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            state = xorshift64(state);
            en_passant[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }

    /// Full key of a position, computed from scratch.
    pub fn hash(&self, pos: &Position) -> u64 {
        let mut h = 0u64;
        for (i, cell) in pos.board.iter().enumerate() {
            if let Some(pc) = cell {
                h ^= self.piece_key(*pc, i as u8);
            }
        }
        if pos.side_to_move == Color::Black {
            h ^= self.black_to_move;
        }
        let rights = [
            pos.castling.wk,
            pos.castling.wq,
            pos.castling.bk,
            pos.castling.bq,
        ];
        for (key, allowed) in self.castling.iter().zip(rights) {
            if allowed {
                h ^= key;
            }
        }
        if let Some(ep) = pos.en_passant {
            h ^= self.en_passant[file_of(ep) as usize];
        }
        h
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

/// Computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
