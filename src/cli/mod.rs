//! CLI module for the fake news detector
//!
//! - `serve`: HTTP API
//! - `check`: one-off detection printed as JSON

pub mod check;
pub mod serve;

use clap::{Parser, Subcommand};

/// Fake news detector - corpus similarity plus text classification
#[derive(Parser)]
#[command(name = "fakenews-detector")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Check a single query or PDF and print the decision
    Check(check::CheckArgs),
}
