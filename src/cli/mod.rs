//! CLI module - command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;

/// Ethica - search and stats over a catalog of philosophy teaching scenarios
#[derive(Parser, Debug)]
#[command(name = "ethica")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable JSON output for machine consumption
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/ethica/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file path (overrides config and ETHICA_CATALOG)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search scenarios by text and facet filters
    Search(commands::search::SearchArgs),

    /// Search or list categories
    Categories(commands::categories::CategoriesArgs),

    /// List categories with their scenario counts
    List(commands::list::ListArgs),

    /// Show one scenario in full
    Show(commands::show::ShowArgs),

    /// Corpus-wide statistics
    Stats(commands::stats::StatsArgs),

    /// Tags ranked by usage
    Tags(commands::tags::TagsArgs),

    /// Report catalog validation warnings
    Validate(commands::validate::ValidateArgs),
}
