//! # Aggregator Configuration Module
//!
//! Tunables for the aggregation run: price bounds, provenance length, the
//! fallback quantity for unrecognized meals and the pricing unit policy.

// Constants for aggregation
pub const PRICE_FLOOR: f64 = 0.49;
pub const PRICE_CEILING: f64 = 35.00;
pub const MAX_SOURCE_MEALS: usize = 3;
pub const FALLBACK_QUANTITY: &str = "1 serving";
pub const DEFAULT_ITEM_PRICE: f64 = 3.49; // used when no category price applies

/// How a parsed magnitude is matched against a price entry's reference unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceUnitPolicy {
    /// Multiply the magnitude as parsed, ignoring its unit
    #[default]
    AsParsed,
    /// Convert the magnitude into the reference unit first when both units
    /// share a convertible family (volume or weight)
    ConvertToReference,
}

/// Configuration structure for an aggregation run
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Lowest price any line item may carry
    pub price_floor: f64,
    /// Highest price any line item may carry
    pub price_ceiling: f64,
    /// Number of source meals kept for provenance display
    pub max_source_meals: usize,
    /// Quantity string given to meals that match no keyword
    pub fallback_quantity: String,
    /// Unit handling when pricing from the reference table
    pub price_unit_policy: PriceUnitPolicy,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            price_floor: PRICE_FLOOR,
            price_ceiling: PRICE_CEILING,
            max_source_meals: MAX_SOURCE_MEALS,
            fallback_quantity: FALLBACK_QUANTITY.to_string(),
            price_unit_policy: PriceUnitPolicy::default(),
        }
    }
}
