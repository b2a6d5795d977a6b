//! Player settings: TOML file first, then command-line overrides.

use anyhow::{bail, Context, Result};
use chess_core::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Who sits on the other side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Two people share the terminal.
    Human,
    /// One person plays the engine.
    Computer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaySide {
    White,
    Black,
}

impl From<PlaySide> for Color {
    fn from(side: PlaySide) -> Self {
        match side {
            PlaySide::White => Color::White,
            PlaySide::Black => Color::Black,
        }
    }
}

/// Game setup for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    pub mode: Mode,
    /// Search depth in plies.
    pub depth: u32,
    pub computer_side: PlaySide,
    /// Pause before the computer replies.
    pub move_delay_ms: u64,
    pub start_fen: Option<String>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Computer,
            depth: minimax_engine::DEFAULT_DEPTH,
            computer_side: PlaySide::Black,
            move_delay_ms: 250,
            start_fen: None,
        }
    }
}

impl PlayConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            bail!("depth must be at least 1");
        }
        Ok(())
    }

    /// Builds the config from command-line arguments (program name
    /// excluded). `--config` is read first; the other flags override it
    /// wherever they appear.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut mode = None;
        let mut config_path = None;
        let mut depth = None;
        let mut delay = None;
        let mut fen = None;
        let mut computer_side = None;

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let mut value = || {
                i += 1;
                args.get(i)
                    .map(String::as_str)
                    .with_context(|| format!("{flag} needs a value"))
            };
            match flag {
                "human" => mode = Some(Mode::Human),
                "computer" => mode = Some(Mode::Computer),
                "--config" | "-c" => config_path = Some(value()?.to_string()),
                "--depth" | "-d" => {
                    let v = value()?;
                    depth = Some(v.parse::<u32>().with_context(|| format!("bad depth '{v}'"))?);
                }
                "--delay" => {
                    let v = value()?;
                    delay = Some(v.parse::<u64>().with_context(|| format!("bad delay '{v}'"))?);
                }
                "--fen" => fen = Some(value()?.to_string()),
                "--computer-plays" => {
                    computer_side = Some(match value()? {
                        "white" | "w" => PlaySide::White,
                        "black" | "b" => PlaySide::Black,
                        other => bail!("--computer-plays expects white or black, got '{other}'"),
                    })
                }
                other => bail!("unknown argument '{other}'"),
            }
            i += 1;
        }

        let mut config = match config_path {
            Some(path) => Self::load(Path::new(&path))?,
            None => Self::default(),
        };
        if let Some(mode) = mode {
            config.mode = mode;
        }
        if let Some(depth) = depth {
            config.depth = depth;
        }
        if let Some(delay) = delay {
            config.move_delay_ms = delay;
        }
        if let Some(side) = computer_side {
            config.computer_side = side;
        }
        if fen.is_some() {
            config.start_fen = fen;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
