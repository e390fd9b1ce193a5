//! # Pantry Integration
//!
//! Glue between a generated grocery list and the user's pantry inventory:
//! skipping what is already stocked, turning purchased items into pantry
//! records, and totalling what is still left to buy.

use crate::ingredient_model::GroceryLineItem;
use crate::measurement_patterns::LEADING_NUMBER_REGEX;
use crate::pricing::{effective_item_price, round_cents};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A pantry-stock record created from a purchased grocery item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
    /// Inventory category ("Meat" for proteins)
    pub category: String,
    pub notes: String,
}

impl PantryItem {
    /// Convert a purchased grocery item into a pantry record
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grocery_aggregator::categorization::Category;
    /// use grocery_aggregator::ingredient_integration::PantryItem;
    /// use grocery_aggregator::ingredient_model::GroceryLineItem;
    ///
    /// let item = GroceryLineItem::new("Chicken Breast", Category::Protein, "2 lbs")
    ///     .with_source_meal("Grilled Chicken Salad");
    /// let stocked = PantryItem::from_purchased(&item, 8.58);
    /// assert_eq!(stocked.quantity, 2.0);
    /// assert_eq!(stocked.category, "Meat");
    /// assert_eq!(stocked.notes, "From meal: Grilled Chicken Salad");
    /// ```
    pub fn from_purchased(item: &GroceryLineItem, unit_price: f64) -> Self {
        let notes = if item.source_meal.is_empty() {
            String::new()
        } else {
            format!("From meal: {}", item.source_meal)
        };

        Self {
            name: item.name.clone(),
            quantity: leading_quantity(&item.quantity),
            unit_price,
            category: item.category.inventory_label().to_string(),
            notes,
        }
    }
}

/// Leading number of a display quantity, 1 when there is none
pub fn leading_quantity(quantity: &str) -> f64 {
    LEADING_NUMBER_REGEX
        .captures(quantity)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(1.0)
}

/// Drop grocery items already stocked in the pantry
///
/// Names are matched trimmed and case-insensitively. Returns the kept items
/// and how many were skipped.
pub fn exclude_stocked<S: AsRef<str>>(
    items: Vec<GroceryLineItem>,
    pantry_names: &[S],
) -> (Vec<GroceryLineItem>, usize) {
    let stocked: HashSet<String> = pantry_names
        .iter()
        .map(|name| name.as_ref().trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    let before = items.len();
    let kept: Vec<GroceryLineItem> = items
        .into_iter()
        .filter(|item| !stocked.contains(&item.name.trim().to_lowercase()))
        .collect();
    let skipped = before - kept.len();

    if skipped > 0 {
        info!("{} items skipped, already in pantry", skipped);
    }
    (kept, skipped)
}

/// Total price of the items not yet purchased, rounded to cents
pub fn remaining_total(items: &[GroceryLineItem]) -> f64 {
    round_cents(
        items
            .iter()
            .filter(|item| !item.is_purchased)
            .map(|item| effective_item_price(item.estimated_price))
            .sum(),
    )
}
