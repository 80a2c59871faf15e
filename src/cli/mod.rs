//! CLI interface for sharpline
//!
//! Provides subcommands for:
//! - `analyze`: run the decision engine over a slate fixture
//! - `config`: show the effective configuration

mod analyze;

pub use analyze::{AnalyzeArgs, OutputFormat};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sharpline")]
#[command(about = "Market signal decision engine for basketball spread and total lines")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a slate of games and print ranked signals
    Analyze(AnalyzeArgs),
    /// Show the effective configuration
    Config,
}
