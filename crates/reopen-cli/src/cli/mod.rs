use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;

#[cfg(test)]
mod tests;

pub use args::{MatchesArgs, OpenArgs, TouchArgs};

#[derive(Debug, Parser)]
#[command(name = "reopen")]
#[command(about = "Reopen recently edited files by short name", version)]
pub struct Cli {
    /// Backing store file (defaults to $REOPEN_STORE, then ~/.reopen.json).
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record an access for PATH, then open the most likely candidate
    /// sharing its basename.
    Open(OpenArgs),
    /// Record an access for PATH without opening anything.
    Touch(TouchArgs),
    /// Print the ranked match set for a basename as JSON.
    Matches(MatchesArgs),
}
