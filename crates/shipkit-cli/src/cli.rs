//! CLI argument definitions for shipkit.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "shipkit",
    version,
    about = "Deployment tool for 2D game projects",
    long_about = "shipkit generates native platform projects for games, wiring \
                  enabled SDK modules (ads, analytics, social) into the build."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the native project for a deploy target
    Deploy {
        /// Deploy target (currently: android)
        #[arg(short, long, default_value = "android")]
        target: String,
        /// Output directory (default: <project>/deploy/<target>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the deployment manifest without generating output
    Check,

    /// List SDK modules declared in the manifest
    Modules {
        /// Output format: plain, json
        #[arg(long, default_value = "plain")]
        format: String,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
