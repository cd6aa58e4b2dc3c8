//! ethica show - one scenario in full.

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::{EthicaError, Result};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Scenario id
    pub id: String,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let snapshot = ctx.catalog.current();
    let scene = snapshot
        .scenario(&args.id)
        .ok_or_else(|| EthicaError::ScenarioNotFound(args.id.clone()))?;
    let category = snapshot.category(&scene.category_id);

    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "scenario": scene,
                "category": category,
            })
        );
        return Ok(());
    }

    println!("{}", scene.title.bold());
    println!("  id:         {}", scene.id);
    if let Some(cat) = category {
        println!("  category:   {} ({})", cat.title, cat.id);
    }
    println!("  difficulty: {}", scene.difficulty.to_string().yellow());
    println!("  leaning:    {}", scene.leaning);
    println!("  complexity: {}", scene.complexity);
    println!("  time:       {} min", scene.estimated_minutes);
    if !scene.tags.is_empty() {
        let tags: Vec<&str> = scene.tags.iter().map(String::as_str).collect();
        println!("  tags:       {}", tags.join(", "));
    }
    Ok(())
}
