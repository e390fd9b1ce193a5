//! # Measurement Types Module
//!
//! This module defines the core value types shared by the quantity parser,
//! the unit converter and the aggregator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default unit used when a quantity string carries no unit
pub const DEFAULT_UNIT: &str = "each";

/// A parsed quantity string (e.g. "1/2 cup" -> 0.5 "cup")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuantity {
    /// The numeric amount, always strictly positive
    pub magnitude: f64,
    /// Lowercase unit token (e.g. "cup", "cloves", "each")
    pub unit: String,
}

impl ParsedQuantity {
    pub fn new(magnitude: f64, unit: &str) -> Self {
        Self {
            magnitude,
            unit: unit.to_string(),
        }
    }
}

impl Default for ParsedQuantity {
    fn default() -> Self {
        Self::new(1.0, DEFAULT_UNIT)
    }
}

/// Family a unit belongs to; quantities are only summed within one family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFamily {
    /// Converted through milliliters
    Volume,
    /// Converted through grams
    Weight,
    /// Discrete or packaging units, summed per exact unit string
    Count,
    /// Anything else, summed per exact unit string
    Unknown,
}

impl UnitFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitFamily::Volume => "volume",
            UnitFamily::Weight => "weight",
            UnitFamily::Count => "count",
            UnitFamily::Unknown => "unknown",
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One summed bucket of a canonical group, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubEntry {
    /// Summed magnitude in `unit`
    pub magnitude: f64,
    /// Display unit ("cups", "lbs", "cloves", ...)
    pub unit: String,
    /// Family the bucket was summed in
    pub family: UnitFamily,
}

impl SubEntry {
    pub fn new(magnitude: f64, unit: &str, family: UnitFamily) -> Self {
        Self {
            magnitude,
            unit: unit.to_string(),
            family,
        }
    }
}
