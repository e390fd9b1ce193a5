//! # Measurement Patterns Module
//!
//! This module contains the regex patterns used to pull quantities out of
//! free text, both from quantity strings ("1/2 cup") and from ingredient names
//! that accidentally carry a quantity ("2 oz cheese").

use lazy_static::lazy_static;
use regex::Regex;

/// Leading numeric token (integer, decimal or simple fraction) followed by the remainder
pub const QUANTITY_PATTERN: &str = r"^([\d./]+)\s*(.*)$";

/// Leading "a " / "an " article on a unit-only quantity ("a bunch")
pub const ARTICLE_PATTERN: &str = r"^(?:a|an)\s+";

/// Leading decimal number of a display quantity ("1½ cups" -> "1")
pub const LEADING_NUMBER_PATTERN: &str = r"^\s*(\d+(?:\.\d*)?|\.\d+)";

// Longer alternatives come first so "lbs" is not cut down to "lb" + "s".
pub const LEAKED_QUANTITY_PATTERN: &str = r"(?i)^\d[\d./]*\s*(?:(?:ounces|ounce|oz|pounds|pound|lbs|lb|grams|gram|kg|g|cups|cup|tbsp|tsp|ml|each|whole|medium|large|small|cans|can|jars|jar|bunch|heads|head|stalks|stalk|sprigs|sprig|cloves|clove|blocks|block|scoops|scoop|packs|pack|bags|bag|slices|slice|pieces|piece|servings|serving|loaves|loaf)\b)?\s*";

// Lazy static regexes to avoid recompilation
lazy_static! {
    pub static ref QUANTITY_REGEX: Regex =
        Regex::new(QUANTITY_PATTERN).expect("Quantity pattern should be valid");
    pub static ref ARTICLE_REGEX: Regex =
        Regex::new(ARTICLE_PATTERN).expect("Article pattern should be valid");
    pub static ref LEAKED_QUANTITY_REGEX: Regex =
        Regex::new(LEAKED_QUANTITY_PATTERN).expect("Leaked quantity pattern should be valid");
    pub static ref LEADING_NUMBER_REGEX: Regex =
        Regex::new(LEADING_NUMBER_PATTERN).expect("Leading number pattern should be valid");
}
