use crate::error::FenError;
use crate::types::*;
use crate::zobrist::ZOBRIST;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    /// Drops every right that depends on a piece standing on `square`.
    fn touch(&mut self, square: u8) {
        match square {
            0 => self.wq = false,
            7 => self.wk = false,
            4 => {
                self.wk = false;
                self.wq = false;
            }
            56 => self.bq = false,
            63 => self.bk = false,
            60 => {
                self.bk = false;
                self.bq = false;
            }
            _ => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Everything `make_move` destroys, kept so `unmake_move` can restore it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub captured_sq: u8,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights {
                wk: true,
                wq: true,
                bk: true,
                bq: true,
            },
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        };

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(Color::White, kind));
            p.board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            p.board[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    /// Parses Forsyth-Edwards Notation. The two move counters are optional.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::FieldCount(parts.len()));
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut board = [None; 64];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let piece = Piece::from_char(ch).ok_or(FenError::Piece(ch))?;
                    let s = sq(file, rank).ok_or(FenError::RankWidth { rank: rank_idx })?;
                    board[s as usize] = Some(piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankWidth { rank: rank_idx });
                }
            }
            if file != 8 {
                return Err(FenError::RankWidth { rank: rank_idx });
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::Castling(c)),
                }
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            coord => Some(
                coord_to_sq(coord).ok_or_else(|| FenError::EnPassant(coord.to_string()))?,
            ),
        };

        let counter = |idx: usize, default: u32| -> Result<u32, FenError> {
            match parts.get(idx) {
                Some(txt) => txt
                    .parse()
                    .map_err(|_| FenError::Counter(txt.to_string())),
                None => Ok(default),
            }
        };

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock: counter(4, 0)?,
            fullmove_number: counter(5, 1)?,
        })
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.board[rank * 8 + file] {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let before = out.len();
        for (allowed, c) in [
            (self.castling.wk, 'K'),
            (self.castling.wq, 'Q'),
            (self.castling.bk, 'k'),
            (self.castling.bq, 'q'),
        ] {
            if allowed {
                out.push(c);
            }
        }
        if out.len() == before {
            out.push('-');
        }

        out.push(' ');
        match self.en_passant {
            Some(ep) => out.push_str(&sq_to_coord(ep)),
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        (0..64u8).find(|&s| self.board[s as usize] == Some(Piece::new(c, PieceKind::King)))
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn zobrist_hash(&self) -> u64 {
        ZOBRIST.hash(self)
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    fn attacked_by_step(&self, target: u8, by: Piece, deltas: &[(i8, i8)]) -> bool {
        let (tf, tr) = (file_of(target), rank_of(target));
        deltas.iter().any(|(df, dr)| {
            sq(tf + df, tr + dr).is_some_and(|s| self.piece_at(s) == Some(by))
        })
    }

    fn attacked_by_slider(&self, target: u8, by: Color, dirs: &[(i8, i8)], kinds: [PieceKind; 2]) -> bool {
        let (tf, tr) = (file_of(target), rank_of(target));
        for (df, dr) in dirs {
            let (mut f, mut r) = (tf + df, tr + dr);
            while let Some(s) = sq(f, r) {
                if let Some(pc) = self.piece_at(s) {
                    if pc.color == by && kinds.contains(&pc.kind) {
                        return true;
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }
        false
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        // Pawns attack diagonally forward, so look one rank behind the target.
        let pawn_dirs: &[(i8, i8)] = match by {
            Color::White => &[(-1, -1), (1, -1)],
            Color::Black => &[(-1, 1), (1, 1)],
        };
        self.attacked_by_step(target, Piece::new(by, PieceKind::Pawn), pawn_dirs)
            || self.attacked_by_step(target, Piece::new(by, PieceKind::Knight), &KNIGHT_DELTAS)
            || self.attacked_by_step(target, Piece::new(by, PieceKind::King), &KING_DELTAS)
            || self.attacked_by_slider(
                target,
                by,
                &DIAGONALS,
                [PieceKind::Bishop, PieceKind::Queen],
            )
            || self.attacked_by_slider(
                target,
                by,
                &ORTHOGONALS,
                [PieceKind::Rook, PieceKind::Queen],
            )
    }

    /// Plays `mv`, which must be pseudo-legal for the side to move.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let (from, to) = (mv.from, mv.to);
        let moved = self.piece_at(from).expect("no piece on from-square");

        let mut undo = Undo {
            captured: self.piece_at(to),
            captured_sq: to,
            moved_piece: moved,
            rook_move: None,
            castling: self.castling.clone(),
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };

        if mv.is_en_passant {
            let behind = match moved.color {
                Color::White => to - 8,
                Color::Black => to + 8,
            };
            undo.captured = self.piece_at(behind);
            undo.captured_sq = behind;
            self.set_piece(behind, None);
        }

        self.set_piece(from, None);
        let placed = match mv.promo {
            Some(kind) if moved.kind == PieceKind::Pawn => Piece::new(moved.color, kind),
            _ => moved,
        };
        self.set_piece(to, Some(placed));

        if mv.is_castle && moved.kind == PieceKind::King {
            // e1g1 h1f1, e1c1 a1d1 and the same on the eighth rank
            let (rf, rt) = if to > from { (from + 3, from + 1) } else { (from - 4, from - 1) };
            let rook = self.piece_at(rf);
            self.set_piece(rf, None);
            self.set_piece(rt, rook);
            undo.rook_move = Some((rf, rt));
        }

        self.castling.touch(from);
        self.castling.touch(to);

        self.en_passant = None;
        if moved.kind == PieceKind::Pawn && (rank_of(to) - rank_of(from)).abs() == 2 {
            self.en_passant = Some((from + to) / 2);
        }

        if moved.kind == PieceKind::Pawn || undo.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        undo
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.piece_at(rt);
            self.set_piece(rt, None);
            self.set_piece(rf, rook);
        }

        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(undo.moved_piece));
        self.set_piece(undo.captured_sq, undo.captured);
    }

    /// Fifty moves by each side without a capture or pawn move.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Neither side can ever deliver mate: bare kings, a single minor piece,
    /// or only bishops that all stand on one square colour.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        let mut bishop_shades = [false; 2];
        for (i, cell) in self.board.iter().enumerate() {
            let Some(pc) = cell else { continue };
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Knight => minors += 1,
                PieceKind::Bishop => {
                    minors += 1;
                    let s = i as u8;
                    bishop_shades[((file_of(s) + rank_of(s)) % 2) as usize] = true;
                }
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            }
        }

        if minors <= 1 {
            return true;
        }
        let bishops_only = self
            .board
            .iter()
            .flatten()
            .all(|pc| matches!(pc.kind, PieceKind::King | PieceKind::Bishop));
        bishops_only && !(bishop_shades[0] && bishop_shades[1])
    }
}

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
