//! # Meal Expander Module
//!
//! Turns a free-text meal name into the ingredient lines needed to cook it.
//! Every keyword found in the lowercased meal name contributes its ingredient
//! set, so "Chicken Stir-Fry with Rice" pulls from "chicken", "stir" and
//! "rice". Ingredients repeated across matched sets are kept once, first
//! occurrence winning. Meals matching no keyword become a single line named
//! after the meal itself.

use crate::categorization::Category::*;
use crate::categorization::{CategorizationService, Category};
use crate::ingredient_model::RawIngredientLine;
use crate::text_processing::normalize_ingredient_name;
use log::{debug, trace};
use std::collections::HashSet;

type IngredientSpec = (&'static str, Category, &'static str);

/// Ordered keyword -> ingredient lines, scanned top to bottom
const MEAL_INGREDIENTS: &[(&str, &[IngredientSpec])] = &[
    (
        "chicken",
        &[
            ("Chicken Breast", Protein, "1 lb"),
            ("Olive Oil", Pantry, "2 tbsp"),
            ("Garlic", Produce, "3 cloves"),
            ("Onions", Produce, "1 each"),
            ("Salt", Pantry, "1 tsp"),
        ],
    ),
    (
        "salmon",
        &[
            ("Salmon Fillet", Protein, "6 oz"),
            ("Lemons", Produce, "1 each"),
            ("Asparagus", Produce, "1 bunch"),
            ("Olive Oil", Pantry, "1 tbsp"),
            ("Garlic", Produce, "2 cloves"),
        ],
    ),
    (
        "beef",
        &[
            ("Ground Beef", Protein, "1 lb"),
            ("Onions", Produce, "1 each"),
            ("Garlic", Produce, "4 cloves"),
            ("Tomatoes", Produce, "2 each"),
        ],
    ),
    (
        "steak",
        &[
            ("Ribeye Steak", Protein, "12 oz"),
            ("Butter", Dairy, "2 tbsp"),
            ("Rosemary", Produce, "2 sprigs"),
            ("Garlic", Produce, "3 cloves"),
        ],
    ),
    (
        "stir",
        &[
            ("Soy Sauce", Pantry, "3 tbsp"),
            ("Bell Peppers", Produce, "2 each"),
            ("Broccoli", Produce, "1 head"),
            ("Sesame Oil", Pantry, "1 tbsp"),
            ("Garlic", Produce, "2 cloves"),
            ("Brown Rice", Grains, "1 cup"),
        ],
    ),
    (
        "salad",
        &[
            ("Romaine Lettuce", Produce, "1 head"),
            ("Cherry Tomatoes", Produce, "1 cup"),
            ("Cucumber", Produce, "1 each"),
            ("Olive Oil", Pantry, "2 tbsp"),
            ("Lemons", Produce, "1 each"),
        ],
    ),
    (
        "pasta",
        &[
            ("Pasta", Grains, "8 oz"),
            ("Marinara Sauce", Pantry, "1 jar"),
            ("Parmesan Cheese", Dairy, "2 oz"),
            ("Garlic", Produce, "3 cloves"),
            ("Olive Oil", Pantry, "1 tbsp"),
        ],
    ),
    (
        "taco",
        &[
            ("Corn Tortillas", Grains, "1 pack"),
            ("Limes", Produce, "2 each"),
            ("Cilantro", Produce, "1 bunch"),
            ("Sour Cream", Dairy, "0.25 cup"),
            ("Avocados", Produce, "1 each"),
            ("Onions", Produce, "1 each"),
        ],
    ),
    (
        "shrimp",
        &[
            ("Shrimp", Protein, "8 oz"),
            ("Butter", Dairy, "2 tbsp"),
            ("Garlic", Produce, "3 cloves"),
            ("Lemons", Produce, "1 each"),
        ],
    ),
    (
        "oatmeal",
        &[
            ("Rolled Oats", Grains, "1 cup"),
            ("Bananas", Produce, "1 each"),
            ("Honey", Pantry, "1 tbsp"),
            ("Milk", Dairy, "0.5 cup"),
        ],
    ),
    (
        "yogurt",
        &[
            ("Greek Yogurt", Dairy, "1 cup"),
            ("Mixed Berries", Produce, "0.5 cup"),
            ("Honey", Pantry, "1 tsp"),
            ("Granola", Pantry, "0.25 cup"),
        ],
    ),
    (
        "quinoa",
        &[
            ("Quinoa", Grains, "1 cup"),
            ("Vegetable Broth", Pantry, "2 cups"),
            ("Chickpeas", Protein, "1 can"),
            ("Spinach", Produce, "2 cups"),
            ("Lemons", Produce, "1 each"),
        ],
    ),
    (
        "smoothie",
        &[
            ("Bananas", Produce, "1 each"),
            ("Mixed Berries", Produce, "1 cup"),
            ("Almond Milk", Beverages, "1 cup"),
            ("Protein Powder", Pantry, "1 scoop"),
        ],
    ),
    (
        "avocado",
        &[
            ("Avocados", Produce, "1 each"),
            ("Whole Wheat Bread", Grains, "1 loaf"),
            ("Eggs", Protein, "2 each"),
            ("Lemons", Produce, "0.5 each"),
        ],
    ),
    (
        "soup",
        &[
            ("Vegetable Broth", Pantry, "4 cups"),
            ("Carrots", Produce, "2 each"),
            ("Celery", Produce, "2 stalks"),
            ("Onions", Produce, "1 each"),
            ("Garlic", Produce, "3 cloves"),
        ],
    ),
    (
        "wrap",
        &[
            ("Whole Wheat Tortillas", Grains, "2 each"),
            ("Turkey Slices", Protein, "4 oz"),
            ("Romaine Lettuce", Produce, "2 leaves"),
            ("Hummus", Pantry, "2 tbsp"),
        ],
    ),
    (
        "rice",
        &[("Brown Rice", Grains, "1 cup"), ("Soy Sauce", Pantry, "2 tbsp")],
    ),
    (
        "bowl",
        &[
            ("Mixed Greens", Produce, "2 cups"),
            ("Brown Rice", Grains, "0.5 cup"),
            ("Olive Oil", Pantry, "1 tbsp"),
            ("Avocados", Produce, "0.5 each"),
            ("Cherry Tomatoes", Produce, "0.5 cup"),
        ],
    ),
    (
        "egg",
        &[
            ("Eggs", Protein, "3 each"),
            ("Olive Oil", Pantry, "1 tsp"),
            ("Bell Peppers", Produce, "0.5 each"),
            ("Onions", Produce, "0.5 each"),
        ],
    ),
    (
        "lentil",
        &[
            ("Red Lentils", Protein, "1 cup"),
            ("Vegetable Broth", Pantry, "3 cups"),
            ("Cumin", Pantry, "1 tsp"),
            ("Onions", Produce, "1 each"),
            ("Garlic", Produce, "3 cloves"),
        ],
    ),
    (
        "pork",
        &[
            ("Pork Tenderloin", Protein, "1 lb"),
            ("Garlic", Produce, "3 cloves"),
            ("Rosemary", Produce, "1 sprig"),
            ("Olive Oil", Pantry, "1 tbsp"),
        ],
    ),
    (
        "turkey",
        &[
            ("Turkey Breast", Protein, "1 lb"),
            ("Onions", Produce, "1 each"),
            ("Celery", Produce, "2 stalks"),
            ("Garlic", Produce, "2 cloves"),
        ],
    ),
    (
        "tofu",
        &[
            ("Firm Tofu", Protein, "1 block"),
            ("Soy Sauce", Pantry, "2 tbsp"),
            ("Sesame Oil", Pantry, "1 tbsp"),
            ("Broccoli", Produce, "1 head"),
        ],
    ),
    (
        "berry",
        &[
            ("Mixed Berries", Produce, "1 cup"),
            ("Greek Yogurt", Dairy, "0.5 cup"),
        ],
    ),
    ("banana", &[("Bananas", Produce, "2 each")]),
    ("apple", &[("Apples", Produce, "2 each")]),
    (
        "oat",
        &[("Rolled Oats", Grains, "1 cup"), ("Milk", Dairy, "0.5 cup")],
    ),
    ("bread", &[("Whole Wheat Bread", Grains, "1 loaf")]),
    ("cheese", &[("Cheddar Cheese", Dairy, "8 oz")]),
    ("tomato", &[("Tomatoes", Produce, "2 each")]),
    ("spinach", &[("Spinach", Produce, "1 bag")]),
    ("kale", &[("Kale", Produce, "1 bunch")]),
    ("sweet", &[("Sweet Potatoes", Produce, "2 each")]),
    ("broccoli", &[("Broccoli", Produce, "1 head")]),
    ("pepper", &[("Bell Peppers", Produce, "2 each")]),
    (
        "mediterranean",
        &[
            ("Olive Oil", Pantry, "2 tbsp"),
            ("Tomatoes", Produce, "2 each"),
            ("Cucumber", Produce, "1 each"),
            ("Garlic", Produce, "2 cloves"),
            ("Lemons", Produce, "1 each"),
        ],
    ),
    (
        "curry",
        &[
            ("Onions", Produce, "1 each"),
            ("Garlic", Produce, "3 cloves"),
            ("Cumin", Pantry, "1 tsp"),
            ("Coconut Milk", Pantry, "1 can"),
            ("Brown Rice", Grains, "1 cup"),
        ],
    ),
    (
        "sandwich",
        &[
            ("Whole Wheat Bread", Grains, "1 loaf"),
            ("Romaine Lettuce", Produce, "2 leaves"),
            ("Tomatoes", Produce, "1 each"),
        ],
    ),
    (
        "pancake",
        &[
            ("Eggs", Protein, "2 each"),
            ("Milk", Dairy, "1 cup"),
            ("Whole Wheat Bread", Grains, "1 loaf"),
            ("Bananas", Produce, "1 each"),
            ("Honey", Pantry, "2 tbsp"),
        ],
    ),
    (
        "fish",
        &[
            ("Salmon Fillet", Protein, "6 oz"),
            ("Lemons", Produce, "1 each"),
            ("Olive Oil", Pantry, "1 tbsp"),
        ],
    ),
    (
        "veggie",
        &[
            ("Bell Peppers", Produce, "1 each"),
            ("Broccoli", Produce, "1 head"),
            ("Carrots", Produce, "2 each"),
            ("Olive Oil", Pantry, "1 tbsp"),
        ],
    ),
    (
        "fruit",
        &[
            ("Bananas", Produce, "2 each"),
            ("Apples", Produce, "1 each"),
            ("Mixed Berries", Produce, "1 cup"),
        ],
    ),
    (
        "granola",
        &[
            ("Granola", Pantry, "1 cup"),
            ("Greek Yogurt", Dairy, "1 cup"),
            ("Honey", Pantry, "1 tbsp"),
        ],
    ),
    (
        "hummus",
        &[
            ("Hummus", Pantry, "4 tbsp"),
            ("Carrots", Produce, "2 each"),
            ("Cucumber", Produce, "1 each"),
        ],
    ),
    (
        "burrito",
        &[
            ("Whole Wheat Tortillas", Grains, "2 each"),
            ("Brown Rice", Grains, "0.5 cup"),
            ("Chickpeas", Protein, "1 can"),
            ("Avocados", Produce, "1 each"),
            ("Sour Cream", Dairy, "2 tbsp"),
        ],
    ),
];

/// Keywords found in a meal name, in table order
pub fn matched_keywords(meal_name: &str) -> Vec<&'static str> {
    let lowered = meal_name.to_lowercase();
    MEAL_INGREDIENTS
        .iter()
        .map(|(keyword, _)| *keyword)
        .filter(|keyword| lowered.contains(keyword))
        .collect()
}

/// Expand a meal name into its ingredient lines
///
/// Lines are deduplicated by canonical name; the returned lines are not yet
/// tagged with a source meal.
///
/// # Examples
///
/// ```rust
/// use grocery_aggregator::meal_expander::expand_meal;
///
/// let lines = expand_meal("Grilled Chicken Salad", "1 serving");
/// assert!(lines.iter().any(|l| l.name == "Chicken Breast"));
/// assert_eq!(lines.iter().filter(|l| l.name == "Olive Oil").count(), 1);
///
/// let lines = expand_meal("Zzzblorpmeal123", "1 serving");
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].quantity, "1 serving");
/// ```
pub fn expand_meal(meal_name: &str, fallback_quantity: &str) -> Vec<RawIngredientLine> {
    let lowered = meal_name.to_lowercase();
    let mut seen = HashSet::new();
    let mut lines = Vec::new();
    let mut matched = false;

    for (keyword, ingredients) in MEAL_INGREDIENTS {
        if !lowered.contains(keyword) {
            continue;
        }
        matched = true;
        trace!("Meal '{}' matched keyword '{}'", meal_name, keyword);

        for (name, category, quantity) in ingredients.iter() {
            let canonical = normalize_ingredient_name(name);
            if seen.insert(canonical.clone()) {
                lines.push(RawIngredientLine::new(&canonical, *category, quantity));
            }
        }
    }

    if !matched {
        let canonical = normalize_ingredient_name(meal_name);
        let category = CategorizationService::categorize(meal_name);
        debug!(
            "No keyword for meal '{}', using single line '{}' ({})",
            meal_name, canonical, category
        );
        lines.push(RawIngredientLine::new(&canonical, category, fallback_quantity));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(lines: &[RawIngredientLine]) -> Vec<&str> {
        lines.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn test_single_keyword_expansion() {
        let lines = expand_meal("Beef Chili", "1 serving");
        assert_eq!(names(&lines), vec!["Ground Beef", "Onions", "Garlic", "Tomatoes"]);
        assert_eq!(lines[0].category, Category::Protein);
        assert_eq!(lines[0].quantity, "1 lb");
    }

    #[test]
    fn test_multiple_keywords_merge_and_dedupe() {
        let lines = expand_meal("Chicken Stir-Fry with Rice", "1 serving");
        assert_eq!(matched_keywords("Chicken Stir-Fry with Rice"), vec!["chicken", "stir", "rice"]);

        // Garlic comes from both "chicken" and "stir"; first quantity wins
        let garlic: Vec<_> = lines.iter().filter(|l| l.name == "Garlic").collect();
        assert_eq!(garlic.len(), 1);
        assert_eq!(garlic[0].quantity, "3 cloves");

        // Brown Rice from "stir" (1 cup) wins over "rice"
        let rice: Vec<_> = lines.iter().filter(|l| l.name == "Brown Rice").collect();
        assert_eq!(rice.len(), 1);
        assert_eq!(rice[0].quantity, "1 cup");

        assert!(names(&lines).contains(&"Soy Sauce"));
        assert!(names(&lines).contains(&"Chicken Breast"));
    }

    #[test]
    fn test_keyword_matching_is_substring_and_case_insensitive() {
        // "oatmeal" also contains "oat"; "veggie" contains "egg"
        assert_eq!(matched_keywords("OATMEAL with Berries"), vec!["oatmeal", "oat"]);
        assert_eq!(matched_keywords("Berry Parfait"), vec!["berry"]);
        assert_eq!(matched_keywords("Veggie Scramble"), vec!["egg", "veggie"]);
    }

    #[test]
    fn test_fallback_for_unknown_meal() {
        let lines = expand_meal("Zzzblorpmeal123", "1 serving");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Zzzblorpmeal123");
        assert_eq!(lines[0].category, Category::Other);
        assert_eq!(lines[0].quantity, "1 serving");
    }

    #[test]
    fn test_fallback_uses_classifier() {
        let lines = expand_meal("Frozen Peas", "2 servings");
        assert_eq!(lines.len(), 1);
        // "frozen" is a qualifier for the name but a keyword for the category
        assert_eq!(lines[0].name, "Peas");
        assert_eq!(lines[0].category, Category::Frozen);
        assert_eq!(lines[0].quantity, "2 servings");
    }

    #[test]
    fn test_empty_meal_name_falls_back() {
        let lines = expand_meal("", "1 serving");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Unknown Item");
    }

    #[test]
    fn test_table_names_are_canonical() {
        // Every table name must already be its own normalized form
        for (keyword, ingredients) in MEAL_INGREDIENTS {
            for (name, _, _) in ingredients.iter() {
                assert_eq!(
                    normalize_ingredient_name(name),
                    *name,
                    "Ingredient '{}' under '{}' is not canonical",
                    name,
                    keyword
                );
            }
        }
    }

    #[test]
    fn test_expansion_never_repeats_a_name() {
        let meal = "Mediterranean Chicken Quinoa Bowl with Avocado, Egg and Pepper Salad";
        let lines = expand_meal(meal, "1 serving");
        let mut unique = HashSet::new();
        for line in &lines {
            assert!(unique.insert(line.name.clone()), "Duplicate '{}'", line.name);
        }
    }
}
