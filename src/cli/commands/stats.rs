//! ethica stats - corpus-wide statistics.

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct StatsArgs {}

pub fn run(ctx: &AppContext, _args: &StatsArgs) -> Result<()> {
    let snapshot = ctx.catalog.current();
    let stats = snapshot.stats();

    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "stats": stats,
            })
        );
        return Ok(());
    }

    println!("{}", "Catalog statistics".bold());
    println!("  categories:   {}", stats.total_categories);
    println!("  scenarios:    {}", stats.total_scenarios);
    println!("  average time: {} min", stats.average_estimated_minutes);

    if !stats.difficulty_breakdown.is_empty() {
        println!();
        println!("{}", "By difficulty".bold());
        for (difficulty, count) in &stats.difficulty_breakdown {
            println!("  {:14} {}", difficulty.to_string().yellow(), count);
        }
    }

    if !stats.philosophy_breakdown.is_empty() {
        println!();
        println!("{}", "By philosophy".bold());
        for (philosophy, count) in &stats.philosophy_breakdown {
            println!("  {:16} {}", philosophy.to_string(), count);
        }
    }

    Ok(())
}
