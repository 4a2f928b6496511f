//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Shortcode post field server and tooling.
#[derive(Parser, Debug)]
#[command(name = "shortcode-ui")]
#[command(author, version = env!("SHORTCODE_UI_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Path to the JSON config file
    #[arg(long, short = 'c', global = true, env = "SHORTCODE_UI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Secret key that field tokens are derived from
    #[arg(long, global = true, env = "SHORTCODE_UI_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}
