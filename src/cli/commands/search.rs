//! ethica search - search scenarios by text and facet filters.

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::catalog::types::EnhancedScenario;
use crate::error::Result;
use crate::search::SearchFilters;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (empty matches every scenario)
    #[arg(default_value = "")]
    pub query: String,

    /// Maximum number of results (default from config)
    #[arg(long, short)]
    pub limit: Option<usize>,

    /// Filter by tags (comma-separated; scenario must carry all of them)
    #[arg(long, short)]
    pub tags: Option<String>,

    /// Filter by difficulty: beginner, intermediate, advanced
    #[arg(long, short)]
    pub difficulty: Option<String>,

    /// Filter by philosophy (e.g. utilitarianism, virtue-ethics)
    #[arg(long, short)]
    pub philosophy: Option<String>,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let tags = args
        .tags
        .as_deref()
        .map(SearchFilters::split_tags)
        .unwrap_or_default();
    // Unknown enum values fail here, before any matching happens.
    let filters = SearchFilters::parse(
        args.difficulty.as_deref(),
        args.philosophy.as_deref(),
        &tags,
    )?;

    let snapshot = ctx.catalog.current();
    let limit = args.limit.unwrap_or(ctx.config.search.default_limit);
    let results: Vec<&EnhancedScenario> = snapshot
        .search(&args.query, &filters)
        .into_iter()
        .take(limit)
        .collect();

    if ctx.robot_mode {
        let output: Vec<serde_json::Value> = results
            .iter()
            .map(|scene| {
                serde_json::json!({
                    "id": scene.id,
                    "title": scene.title,
                    "category_id": scene.category_id,
                    "difficulty": scene.difficulty,
                    "leaning": scene.leaning,
                    "estimated_minutes": scene.estimated_minutes,
                    "complexity": scene.complexity,
                    "tags": scene.tags,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "query": args.query,
                "count": results.len(),
                "limit": limit,
                "results": output,
            })
        );
        return Ok(());
    }

    if results.is_empty() {
        println!("{} No scenarios found for '{}'", "!".yellow(), args.query.cyan());
        println!();
        println!("Try:");
        println!("  - Using different keywords");
        println!("  - Removing filters (--tags, --difficulty, --philosophy)");
        return Ok(());
    }

    println!(
        "{} results for '{}':",
        results.len().to_string().bold(),
        args.query.cyan()
    );
    println!();
    for (i, scene) in results.iter().enumerate() {
        let rank = format!("{}.", i + 1);
        let category_title = snapshot
            .category(&scene.category_id)
            .map_or_else(|| scene.category_id.clone(), |c| c.title.clone());
        println!(
            "{:4} {} {}",
            rank.dimmed(),
            scene.title.bold(),
            scene.difficulty.to_string().yellow()
        );
        println!(
            "     {} in {} ({} min, {}, {})",
            scene.id.dimmed(),
            category_title,
            scene.estimated_minutes,
            scene.complexity,
            scene.leaning
        );
        if !scene.tags.is_empty() {
            let tags: Vec<&str> = scene.tags.iter().map(String::as_str).collect();
            println!("     [{}]", tags.join(", ").dimmed());
        }
        println!();
    }

    Ok(())
}
