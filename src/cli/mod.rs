//! CLI interface for bybit-relay
//!
//! Provides subcommands for:
//! - `serve`: Start the webhook server
//! - `status`: Show current state
//! - `config`: Show configuration

mod serve;

pub use serve::ServeArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bybit-relay")]
#[command(about = "Webhook relay that turns TradingView alerts into signed Bybit derivatives orders")]
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
    /// Start the webhook server
    Serve(ServeArgs),
    /// Show current state
    Status,
    /// Show configuration
    Config,
}
