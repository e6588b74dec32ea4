//! Command-line interface for strictly_round.

use crate::server::play_round;
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_round::{Position, RoundInput, RoundResult};
use tracing::instrument;

/// Strictly Round - stateless tic-tac-toe round server
#[derive(Parser, Debug)]
#[command(name = "strictly_round")]
#[command(about = "Stateless tic-tac-toe round server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long, env = "STRICTLY_ROUND_CONFIG")]
        config: Option<PathBuf>,

        /// Host to bind to (overrides config and environment)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config and environment)
        #[arg(short, long)]
        port: Option<u16>,

        /// Reject submissions that couldn't come from legal play
        #[arg(long)]
        strict: bool,
    },

    /// Evaluate one round and print the result as JSON
    Evaluate {
        /// Turn that just moved ("" before the opening move)
        #[arg(long, default_value = "")]
        turn: String,

        /// Nine comma-separated cells in row-major order, e.g. "X,X,X,,O,,O,,"
        #[arg(long, default_value = ",,,,,,,,")]
        cells: String,

        /// Apply the legality checks
        #[arg(long)]
        strict: bool,
    },
}

/// Parses nine comma-separated cells into round input.
#[instrument]
pub fn parse_cells(turn: &str, cells: &str) -> Result<RoundInput> {
    let values: Vec<&str> = cells.split(',').map(str::trim).collect();
    if values.len() != Position::ALL.len() {
        bail!("Expected 9 comma-separated cells, got {}", values.len());
    }

    let mut input = RoundInput::new(turn.to_string(), Default::default());
    for (position, value) in Position::ALL.iter().zip(values) {
        input.set_cell(*position, value);
    }
    Ok(input)
}

/// Runs the `evaluate` subcommand.
#[instrument]
pub fn evaluate(turn: &str, cells: &str, strict: bool) -> Result<RoundResult> {
    let input = parse_cells(turn, cells)?;
    play_round(&input, strict).context("Round rejected")
}
