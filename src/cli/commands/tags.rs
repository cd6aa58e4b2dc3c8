//! ethica tags - tags ranked by usage.

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct TagsArgs {
    /// Show only the top N tags (default: all)
    #[arg(long, short)]
    pub limit: Option<usize>,
}

pub fn run(ctx: &AppContext, args: &TagsArgs) -> Result<()> {
    let snapshot = ctx.catalog.current();
    let tags = snapshot.popular_tags(args.limit);

    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "count": tags.len(),
                "tags": tags,
            })
        );
        return Ok(());
    }

    if tags.is_empty() {
        println!("{} Catalog has no tagged scenarios", "!".yellow());
        return Ok(());
    }

    for tag in tags {
        println!("{:4} {}", tag.count.to_string().bold(), tag.tag);
    }
    Ok(())
}
