//! # Text Processing Module
//!
//! Name normalization for free-text ingredient mentions. Every raw name is
//! collapsed to a canonical display name so that "2 large eggs", "egg" and
//! "Eggs" all land in the same shopping-list group.
//!
//! ## Pipeline
//!
//! 1. Lowercase and trim
//! 2. Strip a quantity that leaked into the name ("2 oz cheese" -> "cheese")
//! 3. Drop qualifier words ("fresh", "chopped", "large", ...)
//! 4. Look up the longest leading phrase in the synonym table
//! 5. Fall back to Title Case

use crate::measurement_patterns::LEAKED_QUANTITY_REGEX;
use log::{debug, trace};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Canonical name returned for empty input
pub const UNKNOWN_ITEM: &str = "Unknown Item";

/// Size, freshness and preparation descriptors that never change what to buy
pub static QUALIFIER_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "large", "medium", "small", "extra", "fresh", "organic", "chopped", "diced", "minced",
        "sliced", "frozen", "dried", "canned", "raw", "cooked", "whole", "ripe", "baby", "dry",
        "packed",
    ]
    .into_iter()
    .collect()
});

/// Lowercased phrase -> canonical display name
static SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let entries: &[(&str, &str)] = &[
        ("tomato", "Tomatoes"),
        ("tomatoes", "Tomatoes"),
        ("onion", "Onions"),
        ("onions", "Onions"),
        ("garlic clove", "Garlic"),
        ("garlic cloves", "Garlic"),
        ("clove garlic", "Garlic"),
        ("cloves garlic", "Garlic"),
        ("garlic", "Garlic"),
        ("egg", "Eggs"),
        ("eggs", "Eggs"),
        ("large egg", "Eggs"),
        ("large eggs", "Eggs"),
        ("banana", "Bananas"),
        ("bananas", "Bananas"),
        ("apple", "Apples"),
        ("apples", "Apples"),
        ("lemon", "Lemons"),
        ("lemons", "Lemons"),
        ("lime", "Limes"),
        ("limes", "Limes"),
        ("avocado", "Avocados"),
        ("avocados", "Avocados"),
        ("bell pepper", "Bell Peppers"),
        ("bell peppers", "Bell Peppers"),
        ("carrot", "Carrots"),
        ("carrots", "Carrots"),
        ("potato", "Potatoes"),
        ("potatoes", "Potatoes"),
        ("sweet potato", "Sweet Potatoes"),
        ("sweet potatoes", "Sweet Potatoes"),
        ("chicken breast", "Chicken Breast"),
        ("boneless chicken breast", "Chicken Breast"),
        ("chicken breasts", "Chicken Breast"),
        ("salmon fillet", "Salmon Fillet"),
        ("salmon fillets", "Salmon Fillet"),
        ("ground beef", "Ground Beef"),
        ("olive oil", "Olive Oil"),
        ("brown rice", "Brown Rice"),
        ("white rice", "White Rice"),
        ("rice", "White Rice"),
        ("whole wheat bread", "Whole Wheat Bread"),
        // "whole" is a qualifier, so the stripped form must resolve too
        ("wheat bread", "Whole Wheat Bread"),
        ("greek yogurt", "Greek Yogurt"),
        ("mixed berries", "Mixed Berries"),
        ("rolled oats", "Rolled Oats"),
        ("oats", "Rolled Oats"),
        ("almond milk", "Almond Milk"),
        ("soy sauce", "Soy Sauce"),
        ("vegetable broth", "Vegetable Broth"),
        ("spinach", "Spinach"),
        ("romaine lettuce", "Romaine Lettuce"),
        ("lettuce", "Romaine Lettuce"),
        ("cherry tomatoes", "Cherry Tomatoes"),
        ("cucumber", "Cucumber"),
        ("cucumbers", "Cucumber"),
        ("broccoli", "Broccoli"),
        ("asparagus", "Asparagus"),
        ("cilantro", "Cilantro"),
        ("parmesan cheese", "Parmesan Cheese"),
        ("parmesan", "Parmesan Cheese"),
        ("cheddar cheese", "Cheddar Cheese"),
        ("cheddar", "Cheddar Cheese"),
        ("butter", "Butter"),
        ("milk", "Milk"),
        ("honey", "Honey"),
        ("quinoa", "Quinoa"),
        ("chickpeas", "Chickpeas"),
        ("chickpea", "Chickpeas"),
        ("red lentils", "Red Lentils"),
        ("lentils", "Red Lentils"),
        ("corn tortillas", "Corn Tortillas"),
        ("whole wheat tortilla", "Whole Wheat Tortillas"),
        ("whole wheat tortillas", "Whole Wheat Tortillas"),
        ("wheat tortilla", "Whole Wheat Tortillas"),
        ("wheat tortillas", "Whole Wheat Tortillas"),
        ("sour cream", "Sour Cream"),
        ("hummus", "Hummus"),
        ("sesame oil", "Sesame Oil"),
        ("protein powder", "Protein Powder"),
        ("granola", "Granola"),
        ("pasta", "Pasta"),
        ("marinara sauce", "Marinara Sauce"),
        ("kale", "Kale"),
        ("mixed greens", "Mixed Greens"),
        ("celery", "Celery"),
        ("rosemary", "Rosemary"),
        ("cumin", "Cumin"),
        ("firm tofu", "Firm Tofu"),
        ("tofu", "Firm Tofu"),
        ("turkey breast", "Turkey Breast"),
        ("turkey slices", "Turkey Slices"),
        ("pork tenderloin", "Pork Tenderloin"),
        ("shrimp", "Shrimp"),
        ("ribeye steak", "Ribeye Steak"),
        ("steak", "Ribeye Steak"),
    ];
    entries.iter().copied().collect()
});

/// Check whether a lowercase word is a qualifier
pub fn is_qualifier(word: &str) -> bool {
    QUALIFIER_WORDS.contains(word)
}

/// Remove qualifier words from a whitespace separated phrase
pub fn strip_qualifiers(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .filter(|word| !is_qualifier(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a raw ingredient name to its canonical display name
///
/// Never fails: empty input yields [`UNKNOWN_ITEM`], and names missing from
/// the synonym table become their own Title-Cased canonical name.
///
/// # Examples
///
/// ```rust
/// use grocery_aggregator::text_processing::normalize_ingredient_name;
///
/// assert_eq!(normalize_ingredient_name("2 large eggs"), "Eggs");
/// assert_eq!(normalize_ingredient_name("garlic cloves"), "Garlic");
/// assert_eq!(normalize_ingredient_name("fresh dill"), "Dill");
/// assert_eq!(normalize_ingredient_name(""), "Unknown Item");
/// ```
pub fn normalize_ingredient_name(raw_name: &str) -> String {
    let lowered = raw_name.trim().to_lowercase();
    if lowered.is_empty() {
        return UNKNOWN_ITEM.to_string();
    }

    let without_quantity = LEAKED_QUANTITY_REGEX.replace(&lowered, "").trim().to_string();
    let base = if without_quantity.is_empty() {
        lowered.clone()
    } else {
        without_quantity
    };
    trace!("Stripped leaked quantity: '{}' -> '{}'", lowered, base);

    let cleaned = strip_qualifiers(&base);
    let name = if cleaned.is_empty() {
        base.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        cleaned
    };

    if let Some(canonical) = lookup_synonym(&name) {
        debug!("Synonym hit: '{}' -> '{}'", raw_name, canonical);
        return canonical.to_string();
    }

    let titled = title_case(&name);
    if titled.is_empty() {
        UNKNOWN_ITEM.to_string()
    } else {
        titled
    }
}

/// Longest leading phrase first, then the full string as an exact key
fn lookup_synonym(name: &str) -> Option<&'static str> {
    let words: Vec<&str> = name.split_whitespace().collect();
    for len in (1..=words.len()).rev() {
        let phrase = words[..len].join(" ");
        if let Some(canonical) = SYNONYMS.get(phrase.as_str()) {
            return Some(canonical);
        }
    }
    SYNONYMS.get(name).copied()
}

/// Upper-case the first character of every word
///
/// A word is a run of alphanumeric characters or underscores, so
/// "all-purpose flour" becomes "All-Purpose Flour".
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        let is_word_char = c.is_alphanumeric() || c == '_';
        if is_word_char && at_word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = !is_word_char;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_unknown_item() {
        assert_eq!(normalize_ingredient_name(""), UNKNOWN_ITEM);
        assert_eq!(normalize_ingredient_name("   "), UNKNOWN_ITEM);
    }

    #[test]
    fn test_synonym_lookup_is_case_insensitive() {
        assert_eq!(normalize_ingredient_name("TOMATO"), "Tomatoes");
        assert_eq!(normalize_ingredient_name("  Onions "), "Onions");
        assert_eq!(normalize_ingredient_name("Chicken Breasts"), "Chicken Breast");
    }

    #[test]
    fn test_leaked_quantity_is_stripped() {
        assert_eq!(normalize_ingredient_name("2 oz cheddar"), "Cheddar Cheese");
        assert_eq!(normalize_ingredient_name("2 large eggs"), "Eggs");
        assert_eq!(normalize_ingredient_name("1.5 lbs ground beef"), "Ground Beef");
        assert_eq!(normalize_ingredient_name("3 cloves garlic"), "Garlic");
    }

    #[test]
    fn test_qualifiers_are_removed() {
        assert_eq!(normalize_ingredient_name("fresh chopped spinach"), "Spinach");
        assert_eq!(normalize_ingredient_name("organic baby kale"), "Kale");
        assert_eq!(normalize_ingredient_name("ripe bananas"), "Bananas");
    }

    #[test]
    fn test_all_qualifier_name_falls_back_to_unstripped() {
        // Nothing but qualifiers: keep the words rather than returning nothing
        assert_eq!(normalize_ingredient_name("extra large"), "Extra Large");
    }

    #[test]
    fn test_longest_prefix_wins() {
        // "sweet potato" must win over a shorter match further down
        assert_eq!(normalize_ingredient_name("sweet potato mash"), "Sweet Potatoes");
        assert_eq!(normalize_ingredient_name("garlic cloves"), "Garlic");
        assert_eq!(normalize_ingredient_name("bell pepper strips"), "Bell Peppers");
        assert_eq!(normalize_ingredient_name("brown rice"), "Brown Rice");
        assert_eq!(normalize_ingredient_name("rice noodles"), "White Rice");
    }

    #[test]
    fn test_whole_wheat_survives_qualifier_stripping() {
        assert_eq!(normalize_ingredient_name("Whole Wheat Bread"), "Whole Wheat Bread");
        assert_eq!(
            normalize_ingredient_name("whole wheat tortillas"),
            "Whole Wheat Tortillas"
        );
    }

    #[test]
    fn test_unknown_names_are_title_cased() {
        assert_eq!(normalize_ingredient_name("coconut milk"), "Coconut Milk");
        assert_eq!(normalize_ingredient_name("all-purpose flour"), "All-Purpose Flour");
        assert_eq!(normalize_ingredient_name("Zzzblorpmeal123"), "Zzzblorpmeal123");
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let inputs = ["2 large eggs", "Fresh Basil", "", "whole milk", "1 cup rice"];
        for input in inputs {
            assert_eq!(
                normalize_ingredient_name(input),
                normalize_ingredient_name(input),
                "Normalization not deterministic for '{}'",
                input
            );
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("salt"), "Salt");
        assert_eq!(title_case("dark chocolate square"), "Dark Chocolate Square");
        assert_eq!(title_case("o'brien potatoes"), "O'Brien Potatoes");
    }

    #[test]
    fn test_strip_qualifiers() {
        assert_eq!(strip_qualifiers("large  diced onion"), "onion");
        assert_eq!(strip_qualifiers("fresh"), "");
    }
}
