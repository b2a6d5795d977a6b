//! Chess Play CLI
//!
//! Runs one game on stdin/stdout. Logs go to stderr (`RUST_LOG`).

use anyhow::Result;
use chess_play::{GameController, Mode, PlayConfig};
use std::env;
use std::io;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("ML-chess terminal player");
    println!();
    println!("Usage:");
    println!("  chess_play [human|computer] [options]");
    println!();
    println!("Options:");
    println!("  --config <path>         read settings from a TOML file");
    println!("  --depth <plies>         engine search depth (default 2)");
    println!("  --delay <ms>            pause before the engine replies (default 250)");
    println!("  --computer-plays <side> white or black (default black)");
    println!("  --fen <fen>             start from this position");
    println!();
    println!("Examples:");
    println!("  chess_play computer --depth 3");
    println!("  chess_play human --fen \"8/8/8/4k3/8/8/4P3/4K3 w - - 0 1\"");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args
        .iter()
        .any(|a| matches!(a.as_str(), "help" | "--help" | "-h"))
    {
        print_usage();
        return Ok(());
    }

    let config = PlayConfig::from_args(&args)?;
    let mut controller = GameController::new(config)?;

    match controller.config().mode {
        Mode::Human => println!("Two players. Type 'help' for commands."),
        Mode::Computer => println!(
            "You play {} against the engine (depth {}). Type 'help' for commands.",
            controller
                .computer_color()
                .map(|c| c.other().to_string())
                .unwrap_or_default(),
            controller.config().depth
        ),
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    controller.run(stdin.lock(), &mut stdout)?;
    println!();
    println!("{}", controller.status_text());
    Ok(())
}
