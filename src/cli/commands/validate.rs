//! ethica validate - report catalog validation warnings.
//!
//! A catalog with warnings still loads; the offending records are
//! simply excluded from the index. This command surfaces what was
//! dropped and why.

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Exit non-zero when any warning exists
    #[arg(long)]
    pub strict: bool,
}

pub fn run(ctx: &AppContext, args: &ValidateArgs) -> Result<()> {
    let snapshot = ctx.catalog.current();
    let warnings = snapshot.warnings();

    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": if warnings.is_empty() { "ok" } else { "warnings" },
                "categories": snapshot.categories().len(),
                "scenarios": snapshot.scenarios().len(),
                "warning_count": warnings.len(),
                "warnings": warnings,
            })
        );
    } else if warnings.is_empty() {
        println!(
            "{} Catalog is clean: {} categories, {} scenarios",
            "ok".green().bold(),
            snapshot.categories().len(),
            snapshot.scenarios().len()
        );
    } else {
        println!(
            "{} {} record(s) excluded from the index:",
            "!".yellow(),
            warnings.len()
        );
        for warning in warnings {
            println!("  {} {}", warning.record.bold(), warning.detail);
        }
    }

    if args.strict && !warnings.is_empty() {
        return Err(crate::error::EthicaError::Validation(format!(
            "{} catalog warning(s)",
            warnings.len()
        )));
    }
    Ok(())
}
