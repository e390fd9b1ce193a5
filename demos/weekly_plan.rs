//! Builds a grocery list for a small weekly plan and prints it by category.
//!
//! Run with `RUST_LOG=debug cargo run --example weekly_plan` to see the
//! aggregation decisions.

use grocery_aggregator::store_comparison::{cheapest, compare_stores};
use grocery_aggregator::{DayPlan, IngredientAggregator, MealPlan};

fn main() {
    env_logger::init();

    let plan = MealPlan::new(vec![
        DayPlan::new("Monday")
            .with_breakfast("Oatmeal with Berries")
            .with_lunch("Grilled Chicken Salad")
            .with_dinner("Baked Salmon with Vegetables")
            .with_snack("Greek Yogurt"),
        DayPlan::new("Tuesday")
            .with_breakfast("Scrambled Eggs with Toast")
            .with_lunch("Turkey Wrap")
            .with_dinner("Chicken Stir-Fry with Rice")
            .with_snack("Banana"),
        DayPlan::new("Wednesday")
            .with_breakfast("Smoothie Bowl")
            .with_lunch("Lentil Soup with Bread")
            .with_dinner("Shrimp Pasta")
            .with_dessert("Dark Chocolate Square"),
    ]);

    let items = IngredientAggregator::new().aggregate(&plan);

    let mut current_category = None;
    for item in &items {
        if current_category != Some(item.category) {
            println!("\n{}", item.category);
            current_category = Some(item.category);
        }
        println!("  {}", item);
    }

    let quotes = compare_stores(&items);
    println!();
    for quote in &quotes {
        println!(
            "{:<12} {:>7}  ${:>7.2}  save ${:.2}",
            quote.store, quote.distance, quote.estimated_total, quote.savings
        );
    }
    if let Some(best) = cheapest(&quotes) {
        println!("\nCheapest: {}", best.store);
    }
}
