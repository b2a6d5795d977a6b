//! Plain-text board, rank 8 on top.

use chess_core::{sq, Position};
use std::fmt::Write;

/// White pieces upper case, Black lower case, empty squares as dots.
pub fn render_board(pos: &Position) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        let _ = write!(out, "{}", rank + 1);
        for file in 0..8 {
            let cell = sq(file, rank)
                .and_then(|s| pos.piece_at(s))
                .map_or('.', |pc| pc.to_char());
            let _ = write!(out, " {cell}");
        }
        out.push('\n');
    }
    out.push(' ');
    for file in 'a'..='h' {
        let _ = write!(out, " {file}");
    }
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
