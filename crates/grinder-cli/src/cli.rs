use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Check, create and watch grinder configuration files.
#[derive(Parser, Debug)]
#[command(name = "grinder", version, about)]
pub struct Args {
    /// Log directive override (e.g. `grinder=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a config file and report the first invalid setting.
    Check {
        /// Config file path; defaults to the platform config path.
        path: Option<PathBuf>,

        /// Print the failure as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file.
    Init {
        path: Option<PathBuf>,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },

    /// Reload and validate the config whenever it changes on disk.
    Watch { path: Option<PathBuf> },
}

pub fn parse() -> Args {
    Args::parse()
}
