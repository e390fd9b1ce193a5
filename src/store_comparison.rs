//! # Store Comparison Module
//!
//! Estimates what a grocery list would cost at each known store by scaling
//! the list's base total with a per-store price multiplier.

use crate::ingredient_model::GroceryLineItem;
use crate::pricing::{effective_item_price, round_cents};
use log::debug;
use serde::Serialize;

/// A store and how its prices compare to the baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreProfile {
    pub name: &'static str,
    pub distance: &'static str,
    /// Multiplier applied to the baseline total
    pub multiplier: f64,
}

/// Known stores, cheapest first
pub const STORES: &[StoreProfile] = &[
    StoreProfile {
        name: "Aldi",
        distance: "3.1 mi",
        multiplier: 0.80,
    },
    StoreProfile {
        name: "Walmart",
        distance: "2.7 mi",
        multiplier: 0.85,
    },
    StoreProfile {
        name: "Publix",
        distance: "1.1 mi",
        multiplier: 1.00,
    },
    StoreProfile {
        name: "Whole Foods",
        distance: "3.5 mi",
        multiplier: 1.22,
    },
];

/// Estimated cost of a grocery list at one store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreQuote {
    pub store: String,
    pub distance: String,
    pub multiplier: f64,
    pub estimated_total: f64,
    /// Savings against the most expensive store
    pub savings: f64,
}

/// Baseline list total before store multipliers
pub fn base_total(items: &[GroceryLineItem]) -> f64 {
    items
        .iter()
        .map(|item| effective_item_price(item.estimated_price))
        .sum()
}

/// Quote the list at every known store, in table order
///
/// An empty list yields no quotes.
///
/// # Examples
///
/// ```rust
/// use grocery_aggregator::categorization::Category;
/// use grocery_aggregator::ingredient_model::GroceryLineItem;
/// use grocery_aggregator::store_comparison::compare_stores;
///
/// let items = vec![GroceryLineItem::new("Eggs", Category::Protein, "6 each").with_price(10.0)];
/// let quotes = compare_stores(&items);
/// assert_eq!(quotes[0].store, "Aldi");
/// assert_eq!(quotes[0].estimated_total, 8.0);
/// assert_eq!(quotes[0].savings, 4.2);
/// ```
pub fn compare_stores(items: &[GroceryLineItem]) -> Vec<StoreQuote> {
    if items.is_empty() {
        return Vec::new();
    }

    let base = base_total(items);
    debug!("Comparing {} items, base total ${:.2}", items.len(), base);

    let totals: Vec<f64> = STORES
        .iter()
        .map(|store| round_cents(base * store.multiplier))
        .collect();
    let highest = totals.iter().copied().fold(f64::MIN, f64::max);

    STORES
        .iter()
        .zip(totals)
        .map(|(store, total)| StoreQuote {
            store: store.name.to_string(),
            distance: store.distance.to_string(),
            multiplier: store.multiplier,
            estimated_total: total,
            savings: round_cents(highest - total),
        })
        .collect()
}

/// The quote with the lowest total
pub fn cheapest(quotes: &[StoreQuote]) -> Option<&StoreQuote> {
    quotes
        .iter()
        .min_by(|a, b| a.estimated_total.total_cmp(&b.estimated_total))
}
