//! CLI module for the BandMate API
//!
//! Provides subcommands for running the server:
//! - `serve`: run the HTTP API server (default)
//! - `migrate`: apply schema migrations and exit

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// BandMate API - connects musicians with venues
#[derive(Parser)]
#[command(name = "bandmate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default)
    Serve,

    /// Apply schema migrations and exit
    Migrate,
}
