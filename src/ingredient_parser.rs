//! # Ingredient Parser
//!
//! Parses free-text quantity strings ("1/2 cup", "3 cloves", "a bunch") into a
//! [`ParsedQuantity`]. Parsing is total: anything unreadable defaults to one
//! "each", and the magnitude is always strictly positive.
//!
//! ## Usage
//!
//! ```rust
//! use grocery_aggregator::ingredient_parser::parse_quantity_string;
//!
//! let parsed = parse_quantity_string("1/2 cup");
//! assert_eq!(parsed.magnitude, 0.5);
//! assert_eq!(parsed.unit, "cup");
//! ```

use crate::measurement_patterns::{ARTICLE_REGEX, QUANTITY_REGEX};
use crate::measurement_types::{ParsedQuantity, DEFAULT_UNIT};
use crate::text_processing::strip_qualifiers;
use log::trace;

/// Parse a quantity string into magnitude and unit
pub fn parse_quantity_string(quantity: &str) -> ParsedQuantity {
    let normalized = quantity.trim().to_lowercase();
    if normalized.is_empty() {
        return ParsedQuantity::default();
    }

    let Some(captures) = QUANTITY_REGEX.captures(&normalized) else {
        // No leading number: the whole string is the unit ("a bunch" -> "bunch")
        let unit_only = ARTICLE_REGEX.replace(&normalized, "");
        let unit = unit_only.trim();
        let unit = if unit.is_empty() { DEFAULT_UNIT } else { unit };
        trace!("Unit-only quantity '{}' -> 1 {}", quantity, unit);
        return ParsedQuantity::new(1.0, unit);
    };

    let magnitude = parse_magnitude(&captures[1]);
    let unit = strip_qualifiers(captures[2].trim());
    let unit = if unit.is_empty() {
        DEFAULT_UNIT.to_string()
    } else {
        unit
    };

    trace!("Parsed quantity '{}' -> {} {}", quantity, magnitude, unit);
    ParsedQuantity { magnitude, unit }
}

/// Parse a numeric token, defaulting to 1 for anything not positive and finite
fn parse_magnitude(token: &str) -> f64 {
    let value = if token.contains('/') {
        let mut parts = token.split('/');
        let numerator = parts.next().and_then(parse_leading_float);
        let denominator = parts.next().and_then(parse_leading_float);
        match (numerator, denominator) {
            (Some(n), Some(d)) => n / d,
            _ => f64::NAN,
        }
    } else {
        parse_leading_float(token).unwrap_or(f64::NAN)
    };

    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}

/// Parse the longest numeric prefix of a token ("1.5.2" -> 1.5)
fn parse_leading_float(token: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in token.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    token[..end].parse().ok()
}
