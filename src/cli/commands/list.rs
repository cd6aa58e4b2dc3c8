//! ethica list - categories with scenario counts, catalog order.

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ListArgs {}

pub fn run(ctx: &AppContext, _args: &ListArgs) -> Result<()> {
    let snapshot = ctx.catalog.current();

    if ctx.robot_mode {
        let output: Vec<serde_json::Value> = snapshot
            .categories()
            .iter()
            .map(|cat| {
                serde_json::json!({
                    "id": cat.id,
                    "title": cat.title,
                    "difficulty": cat.difficulty,
                    "scenario_ids": cat.scenario_ids,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "count": output.len(),
                "categories": output,
            })
        );
        return Ok(());
    }

    if snapshot.categories().is_empty() {
        println!("{} Catalog has no categories", "!".yellow());
        return Ok(());
    }

    for cat in snapshot.categories() {
        println!(
            "{:30} {:12} {} scenarios",
            cat.title.bold(),
            cat.difficulty.to_string().yellow(),
            cat.scenario_ids.len()
        );
    }
    Ok(())
}
