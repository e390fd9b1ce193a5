//! # Pricing Module
//!
//! Best-effort price estimates for shopping-list lines. Known ingredients are
//! priced from a per-reference-unit table; everything else gets a flat
//! category price scaled gently by quantity. Every estimate is clamped to the
//! configured bounds.

use crate::aggregator_config::{PriceUnitPolicy, DEFAULT_ITEM_PRICE, PRICE_CEILING, PRICE_FLOOR};
use crate::categorization::Category;
use crate::unit_conversion::convert;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Price for one reference unit of an ingredient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceEntry {
    /// Unit the price is quoted in ("lb", "cup", "each", ...)
    pub per: &'static str,
    /// Dollars per reference unit
    pub price: f64,
}

const fn entry(per: &'static str, price: f64) -> PriceEntry {
    PriceEntry { per, price }
}

/// Canonical name -> reference-unit price
static PRICE_TABLE: LazyLock<HashMap<&'static str, PriceEntry>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Proteins
    map.insert("Chicken Breast", entry("lb", 4.29));
    map.insert("Ground Beef", entry("lb", 5.49));
    map.insert("Salmon Fillet", entry("lb", 9.99));
    map.insert("Ribeye Steak", entry("lb", 14.99));
    map.insert("Pork Tenderloin", entry("lb", 4.99));
    map.insert("Turkey Breast", entry("lb", 5.49));
    map.insert("Shrimp", entry("lb", 8.99));
    map.insert("Eggs", entry("each", 0.35));
    map.insert("Chickpeas", entry("can", 1.29));
    map.insert("Red Lentils", entry("cup", 1.49));
    map.insert("Firm Tofu", entry("block", 2.49));
    map.insert("Turkey Slices", entry("oz", 0.65));

    // Dairy
    map.insert("Milk", entry("cup", 0.65));
    map.insert("Greek Yogurt", entry("cup", 1.49));
    map.insert("Butter", entry("tbsp", 0.25));
    map.insert("Cheddar Cheese", entry("oz", 0.50));
    map.insert("Parmesan Cheese", entry("oz", 0.75));
    map.insert("Sour Cream", entry("cup", 2.49));

    // Produce
    map.insert("Bananas", entry("each", 0.29));
    map.insert("Apples", entry("each", 1.09));
    map.insert("Lemons", entry("each", 0.69));
    map.insert("Limes", entry("each", 0.49));
    map.insert("Avocados", entry("each", 1.29));
    map.insert("Tomatoes", entry("each", 0.89));
    map.insert("Onions", entry("each", 0.79));
    map.insert("Bell Peppers", entry("each", 1.19));
    map.insert("Carrots", entry("each", 0.45));
    map.insert("Broccoli", entry("head", 2.49));
    map.insert("Asparagus", entry("bunch", 3.49));
    map.insert("Spinach", entry("bag", 2.99));
    map.insert("Romaine Lettuce", entry("head", 2.29));
    map.insert("Cucumber", entry("each", 0.89));
    map.insert("Cherry Tomatoes", entry("cup", 2.99));
    map.insert("Cilantro", entry("bunch", 0.99));
    map.insert("Rosemary", entry("sprig", 0.50));
    map.insert("Celery", entry("stalk", 0.40));
    map.insert("Kale", entry("bunch", 2.79));
    map.insert("Mixed Greens", entry("cup", 1.25));
    map.insert("Sweet Potatoes", entry("each", 1.29));
    map.insert("Garlic", entry("each", 0.25));
    map.insert("Mixed Berries", entry("cup", 3.49));

    // Grains
    map.insert("Brown Rice", entry("cup", 0.89));
    map.insert("White Rice", entry("cup", 0.65));
    map.insert("Pasta", entry("oz", 0.19));
    map.insert("Whole Wheat Bread", entry("loaf", 3.49));
    map.insert("Rolled Oats", entry("cup", 0.55));
    map.insert("Quinoa", entry("cup", 1.99));
    map.insert("Corn Tortillas", entry("pack", 2.99));
    map.insert("Whole Wheat Tortillas", entry("each", 0.50));
    map.insert("Granola", entry("cup", 1.49));

    // Pantry
    map.insert("Olive Oil", entry("tbsp", 0.30));
    map.insert("Sesame Oil", entry("tbsp", 0.45));
    map.insert("Soy Sauce", entry("tbsp", 0.15));
    map.insert("Honey", entry("tbsp", 0.50));
    map.insert("Vegetable Broth", entry("cup", 0.60));
    map.insert("Marinara Sauce", entry("jar", 3.49));
    map.insert("Hummus", entry("tbsp", 0.30));
    map.insert("Cumin", entry("tsp", 0.15));
    map.insert("Protein Powder", entry("scoop", 1.50));

    // Beverages
    map.insert("Almond Milk", entry("cup", 0.65));

    map
});

/// Look up the reference-unit price for a canonical ingredient name
pub fn price_entry(canonical_name: &str) -> Option<PriceEntry> {
    PRICE_TABLE.get(canonical_name).copied()
}

/// Flat price used for ingredients missing from the price table
pub fn category_fallback_price(category: Category) -> f64 {
    match category {
        Category::Produce => 2.49,
        Category::Protein => 5.99,
        Category::Dairy => 3.49,
        Category::Grains => 2.99,
        Category::Pantry => 2.99,
        Category::Frozen => 4.99,
        Category::Beverages => 2.99,
        Category::Other => DEFAULT_ITEM_PRICE,
    }
}

/// Price estimator with configurable bounds and unit policy
#[derive(Debug, Clone)]
pub struct PriceEstimator {
    floor: f64,
    ceiling: f64,
    policy: PriceUnitPolicy,
}

impl PriceEstimator {
    pub fn new(floor: f64, ceiling: f64, policy: PriceUnitPolicy) -> Self {
        Self {
            floor,
            ceiling,
            policy,
        }
    }

    /// Estimate the price of `magnitude` `unit` of an ingredient
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grocery_aggregator::categorization::Category;
    /// use grocery_aggregator::pricing::PriceEstimator;
    ///
    /// let estimator = PriceEstimator::default();
    /// assert_eq!(estimator.estimate("Chicken Breast", 2.0, "lbs", Category::Protein), 8.58);
    /// assert_eq!(estimator.estimate("Dragon Fruit", 1.0, "each", Category::Produce), 2.49);
    /// ```
    pub fn estimate(
        &self,
        canonical_name: &str,
        magnitude: f64,
        unit: &str,
        category: Category,
    ) -> f64 {
        let raw = match price_entry(canonical_name) {
            Some(entry) => {
                let amount = self.amount_in_reference_unit(magnitude, unit, entry);
                round_cents(amount * entry.price)
            }
            None => {
                debug!(
                    "No price entry for '{}', using {} fallback",
                    canonical_name, category
                );
                let scale = (magnitude / 2.0).max(1.0);
                round_cents(category_fallback_price(category) * scale)
            }
        };

        let clamped = clamp_price(raw, self.floor, self.ceiling);
        if clamped != raw {
            warn!(
                "Clamped price for '{}' ({} {}): {:.2} -> {:.2}",
                canonical_name, magnitude, unit, raw, clamped
            );
        }
        clamped
    }

    fn amount_in_reference_unit(&self, magnitude: f64, unit: &str, entry: PriceEntry) -> f64 {
        match self.policy {
            PriceUnitPolicy::AsParsed => magnitude,
            PriceUnitPolicy::ConvertToReference => {
                convert(magnitude, unit, entry.per).unwrap_or(magnitude)
            }
        }
    }
}

impl Default for PriceEstimator {
    fn default() -> Self {
        Self::new(PRICE_FLOOR, PRICE_CEILING, PriceUnitPolicy::default())
    }
}

/// Clamp a price into `[floor, ceiling]`, mapping NaN to the floor
pub fn clamp_price(price: f64, floor: f64, ceiling: f64) -> f64 {
    price.max(floor).min(ceiling)
}

/// Price used for totals: capped at the ceiling, with a missing or
/// non-positive price counted as [`DEFAULT_ITEM_PRICE`]
pub fn effective_item_price(price: f64) -> f64 {
    if price > 0.0 {
        price.min(PRICE_CEILING)
    } else {
        DEFAULT_ITEM_PRICE
    }
}

/// Round a dollar amount to cents
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
