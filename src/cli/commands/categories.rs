//! ethica categories - search or list categories.

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Search query (empty lists every category)
    #[arg(default_value = "")]
    pub query: String,
}

pub fn run(ctx: &AppContext, args: &CategoriesArgs) -> Result<()> {
    let snapshot = ctx.catalog.current();
    let results = snapshot.search_categories(&args.query);

    if ctx.robot_mode {
        let output: Vec<serde_json::Value> = results
            .iter()
            .map(|cat| {
                serde_json::json!({
                    "id": cat.id,
                    "title": cat.title,
                    "icon": cat.icon,
                    "difficulty": cat.difficulty,
                    "primary_philosophy": cat.primary_philosophy,
                    "approaches": cat.approaches,
                    "tags": cat.tags,
                    "scenario_count": cat.scenario_ids.len(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "query": args.query,
                "count": results.len(),
                "results": output,
            })
        );
        return Ok(());
    }

    if results.is_empty() {
        println!("{} No categories found for '{}'", "!".yellow(), args.query.cyan());
        return Ok(());
    }

    for cat in results {
        println!(
            "{} {} {} ({} scenarios)",
            cat.icon,
            cat.title.bold(),
            cat.difficulty.to_string().yellow(),
            cat.scenario_ids.len()
        );
        let approaches: Vec<&str> = cat.approaches.iter().map(|p| p.as_str()).collect();
        println!("  {} {}", cat.id.dimmed(), approaches.join(", "));
        if !cat.tags.is_empty() {
            let tags: Vec<&str> = cat.tags.iter().map(String::as_str).collect();
            println!("  [{}]", tags.join(", ").dimmed());
        }
    }

    Ok(())
}
