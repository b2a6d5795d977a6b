//! Turn handling for a terminal game: human input, computer replies, take
//! backs and the status line.

use anyhow::Context;
use chess_core::{move_to_coord, Color, Game, GameStatus, Move, MoveError};
use minimax_engine::select_best_move;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{Mode, PlayConfig};
use crate::render::render_board;

const HELP: &str = "\
Commands:
  e2e4, e7e8q   play a move (promotion defaults to queen)
  undo          take back your last move
  moves         list legal moves
  help          show this text
  quit          leave the game";

/// Why a human request was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error("{0} is played by the computer")]
    ComputerSide(Color),
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(String),
    Undo,
    Moves,
    Help,
    Quit,
}

impl Command {
    /// `None` for a blank line. Anything unrecognised is tried as a move.
    pub fn parse(line: &str) -> Option<Self> {
        let word = line.trim().to_ascii_lowercase();
        let command = match word.as_str() {
            "" => return None,
            "undo" | "u" => Command::Undo,
            "moves" | "m" => Command::Moves,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Move(word),
        };
        Some(command)
    }
}

pub struct GameController {
    game: Game,
    config: PlayConfig,
}

impl GameController {
    pub fn new(config: PlayConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let game = match &config.start_fen {
            Some(fen) => {
                Game::from_fen(fen).with_context(|| format!("bad start position '{fen}'"))?
            }
            None => Game::new(),
        };
        Ok(Self { game, config })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &PlayConfig {
        &self.config
    }

    /// The colour the engine plays, if any.
    pub fn computer_color(&self) -> Option<Color> {
        match self.config.mode {
            Mode::Computer => Some(self.config.computer_side.into()),
            Mode::Human => None,
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        self.computer_color() == Some(self.game.side_to_move()) && !self.game.is_game_over()
    }

    pub fn human_move(&mut self, text: &str) -> Result<Move, PlayError> {
        if self.game.is_game_over() {
            return Err(MoveError::GameOver.into());
        }
        let side = self.game.side_to_move();
        if self.computer_color() == Some(side) {
            return Err(PlayError::ComputerSide(side));
        }
        let mv = self.game.play_coord(text)?;
        debug!(mv = %move_to_coord(mv), %side, "human move");
        Ok(mv)
    }

    /// Plays the engine's reply when it is the computer's turn.
    pub fn computer_move(&mut self) -> Option<Move> {
        if !self.is_computer_turn() {
            return None;
        }
        if self.config.move_delay_ms > 0 {
            thread::sleep(Duration::from_millis(self.config.move_delay_ms));
        }
        let mv = select_best_move(self.config.depth, &mut self.game)?;
        self.game.make_move(mv);
        info!(mv = %move_to_coord(mv), depth = self.config.depth, "computer move");
        Some(mv)
    }

    /// Takes back the last move. Against the computer, keeps going until it
    /// is a human's turn again, so the engine's reply goes too.
    pub fn undo(&mut self) -> Result<Vec<Move>, PlayError> {
        let last = self.game.undo_move().ok_or(MoveError::NothingToUndo)?;
        let mut undone = vec![last];
        if self.computer_color() == Some(self.game.side_to_move()) {
            undone.extend(self.game.undo_move());
        }
        Ok(undone)
    }

    pub fn status_text(&self) -> String {
        match self.game.status() {
            GameStatus::Checkmate { loser } => format!("Game over, {loser} is in checkmate."),
            GameStatus::Draw(_) => "Game over, drawn position.".to_string(),
            GameStatus::Ongoing => {
                let side = self.game.side_to_move();
                if self.game.in_check() {
                    format!("{side} to move, {side} is in check")
                } else {
                    format!("{side} to move")
                }
            }
        }
    }

    pub fn legal_moves_text(&self) -> String {
        self.game
            .legal_moves()
            .into_iter()
            .map(move_to_coord)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        let mut lines = input.lines();
        loop {
            if let Some(mv) = self.computer_move() {
                writeln!(out, "Computer plays {}", move_to_coord(mv))?;
            }
            self.draw(out)?;
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("failed to read input")?;
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            match command {
                Command::Quit => break,
                Command::Help => writeln!(out, "{HELP}")?,
                Command::Moves => writeln!(out, "{}", self.legal_moves_text())?,
                Command::Undo => match self.undo() {
                    Ok(undone) => {
                        let list: Vec<String> = undone.into_iter().map(move_to_coord).collect();
                        writeln!(out, "Took back {}", list.join(", "))?;
                    }
                    Err(e) => writeln!(out, "{e}")?,
                },
                Command::Move(text) => match self.human_move(&text) {
                    // Show the human's move before the engine's pause.
                    Ok(_) if self.is_computer_turn() => {
                        self.draw(out)?;
                        out.flush()?;
                    }
                    Ok(_) => {}
                    Err(e) => writeln!(out, "{e}")?,
                },
            }
        }
        Ok(())
    }

    fn draw<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(
            out,
            "\n{}{}\n",
            render_board(self.game.position()),
            self.status_text()
        )
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
