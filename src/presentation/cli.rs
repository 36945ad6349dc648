//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.

use std::path::PathBuf;

use clap::Parser;

/// Generate AssetList Dart classes for every Flutter package in a workspace
#[derive(Parser, Debug)]
#[command(name = "flutter-assets-codegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace root to search for pubspec.yaml files
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Dry run - generate without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Config file (defaults to <ROOT>/asset_codegen.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Default log filter for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
