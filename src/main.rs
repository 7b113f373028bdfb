//! igo: a 9x9 Go rules engine.
//!
//! ## Usage
//!
//! - `igo` - Show a demo
//! - `igo gtp` - Start the GTP command loop on stdin/stdout
//! - `igo demo` - Run the demo
//!
//! Logs go to stderr; use `--log-level` or `RUST_LOG` to choose the filter.

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use igo::board::{Color, vertex};
use igo::gtp::GtpEngine;
use igo::session::Session;

/// igo: a 9x9 Go rules engine
#[derive(Parser)]
#[command(name = "igo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter, e.g. `info` or `igo=debug` (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) loop for scripts and GUI applications
    Gtp,
    /// Play a short scripted game and print the result
    Demo,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match cli.command {
        Some(Commands::Gtp) => {
            let mut engine = GtpEngine::new();
            engine.run(io::stdin().lock(), io::stdout().lock())
        }
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn run_demo() -> Result<()> {
    println!("igo: 9x9 Go rules engine\n");
    let mut session = Session::new();

    // Black walls off the corner while White plays inside it
    println!("=== Capture ===");
    for (row, col) in [(0, 1), (0, 0), (1, 0)] {
        let placed = session.place_stone(row, col)?;
        println!("{} -> {:?}", vertex((row, col)), placed);
    }
    println!("{}", session.board());
    println!(
        "white stones captured: {}\n",
        session.captured(Color::White)
    );

    // White may not fill the corner again: no liberties, nothing captured
    println!("=== Forbidden move ===");
    let placed = session.place_stone(0, 0)?;
    println!("{} -> {:?}\n", vertex((0, 0)), placed);

    println!("=== Territory ===");
    let t = session.territory();
    println!("black {} white {} neutral {}", t.black, t.white, t.neutral);
    println!("history: {}", session.history_record());
    Ok(())
}
