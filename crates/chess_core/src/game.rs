//! A game in progress: the current position plus everything needed to take
//! moves back and to recognise rule draws.

use crate::board::{Position, Undo};
use crate::error::{FenError, MoveError};
use crate::movegen::{has_legal_move, legal_moves};
use crate::notation::{move_to_coord, parse_coord_move};
use crate::types::{Color, Move};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    FiftyMoves,
    Repetition,
    InsufficientMaterial,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is mated.
    Checkmate { loser: Color },
    Draw(DrawReason),
}

/// Owns a position and its move history. Moves are taken back strictly in
/// LIFO order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    position: Position,
    history: Vec<(Move, Undo)>,
    /// Repetition keys of every position reached, the current one last.
    keys: Vec<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_position(position: Position) -> Self {
        let keys = vec![position.zobrist_hash()];
        Self {
            position,
            history: Vec::new(),
            keys,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::from_position)
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Plays a move taken from [`Game::legal_moves`] without re-checking it.
    pub fn make_move(&mut self, mv: Move) {
        let undo = self.position.make_move(mv);
        self.history.push((mv, undo));
        self.keys.push(self.position.zobrist_hash());
    }

    /// Takes back the most recent move, returning it.
    pub fn undo_move(&mut self) -> Option<Move> {
        let (mv, undo) = self.history.pop()?;
        self.keys.pop();
        self.position.unmake_move(mv, undo);
        Some(mv)
    }

    /// Plays `mv` only if the game is still running and the move is legal.
    pub fn try_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if !self.legal_moves().contains(&mv) {
            return Err(MoveError::Illegal(move_to_coord(mv)));
        }
        self.make_move(mv);
        Ok(())
    }

    /// Parses coordinate notation such as `e2e4` and plays the move.
    pub fn play_coord(&mut self, text: &str) -> Result<Move, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        let mv = parse_coord_move(&self.position, text)?;
        self.make_move(mv);
        Ok(mv)
    }

    pub fn in_check(&self) -> bool {
        self.position.in_check(self.position.side_to_move)
    }

    fn has_legal_move(&self) -> bool {
        has_legal_move(&mut self.position.clone())
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_move()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_move()
    }

    /// The current position has occurred at least three times.
    pub fn is_threefold_repetition(&self) -> bool {
        let Some(current) = self.keys.last() else {
            return false;
        };
        self.keys.iter().filter(|&k| k == current).count() >= 3
    }

    pub fn is_draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    fn draw_reason(&self) -> Option<DrawReason> {
        if self.position.is_fifty_move_draw() {
            Some(DrawReason::FiftyMoves)
        } else if self.position.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else if self.is_threefold_repetition() {
            Some(DrawReason::Repetition)
        } else if self.is_stalemate() {
            Some(DrawReason::Stalemate)
        } else {
            None
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.is_checkmate() {
            return GameStatus::Checkmate {
                loser: self.side_to_move(),
            };
        }
        match self.draw_reason() {
            Some(reason) => GameStatus::Draw(reason),
            None => GameStatus::Ongoing,
        }
    }

    /// Checkmate, stalemate or any rule draw.
    pub fn is_game_over(&self) -> bool {
        self.position.is_fifty_move_draw()
            || self.position.is_insufficient_material()
            || self.is_threefold_repetition()
            || !self.has_legal_move()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
