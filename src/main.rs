use anyhow::{Context, Result};
use clap::Parser;
use grocery_aggregator::ingredient_integration::{exclude_stocked, remaining_total};
use grocery_aggregator::store_comparison::{cheapest, compare_stores};
use grocery_aggregator::{IngredientAggregator, MealPlan};
use log::info;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Build a priced grocery list from a weekly meal plan",
    long_about = None
)]
struct Cli {
    /// Path to the meal plan JSON document
    plan: PathBuf,

    /// Include a per-store cost comparison
    #[arg(long)]
    stores: bool,

    /// File of pantry item names, one per line, to leave off the list
    #[arg(long, value_name = "FILE")]
    pantry: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    info!("Loading meal plan from {}", cli.plan.display());

    let plan = MealPlan::load(&cli.plan)
        .with_context(|| format!("Could not load meal plan {}", cli.plan.display()))?;

    let mut items = IngredientAggregator::new().aggregate(&plan);

    let mut skipped = 0;
    if let Some(pantry_path) = &cli.pantry {
        let pantry = fs::read_to_string(pantry_path)
            .with_context(|| format!("Could not read pantry file {}", pantry_path.display()))?;
        let names: Vec<&str> = pantry.lines().collect();
        (items, skipped) = exclude_stocked(items, names.as_slice());
    }

    let mut output = json!({
        "items": items,
        "skipped_in_pantry": skipped,
        "remaining_total": remaining_total(&items),
    });

    if cli.stores {
        let quotes = compare_stores(&items);
        output["cheapest_store"] = json!(cheapest(&quotes).map(|quote| quote.store.clone()));
        output["stores"] = json!(quotes);
    }

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("Could not serialize grocery list")?;

    println!("{}", rendered);
    Ok(())
}
