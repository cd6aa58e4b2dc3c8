//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod categories;
pub mod list;
pub mod search;
pub mod show;
pub mod stats;
pub mod tags;
pub mod validate;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Search(args) => search::run(ctx, args),
        Commands::Categories(args) => categories::run(ctx, args),
        Commands::List(args) => list::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Stats(args) => stats::run(ctx, args),
        Commands::Tags(args) => tags::run(ctx, args),
        Commands::Validate(args) => validate::run(ctx, args),
    }
}
