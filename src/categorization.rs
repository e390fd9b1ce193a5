//! # Categorization Module
//!
//! Assigns canonical ingredient names to grocery-store aisles by keyword
//! substring matching against an ordered rule table. The first category with
//! a matching keyword wins, so table order is part of the behavior.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shopping category for grocery store organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Produce,
    Protein,
    Dairy,
    Grains,
    Pantry,
    Frozen,
    Beverages,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Protein => "Protein",
            Category::Dairy => "Dairy",
            Category::Grains => "Grains",
            Category::Pantry => "Pantry",
            Category::Frozen => "Frozen",
            Category::Beverages => "Beverages",
            Category::Other => "Other",
        }
    }

    /// Category used by the pantry inventory (proteins are stocked as "Meat")
    pub fn inventory_label(&self) -> &'static str {
        match self {
            Category::Protein => "Meat",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered category rules, evaluated top to bottom
///
/// "almond milk" lands in Dairy: "milk" is checked before Beverages.
const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::Protein,
        &[
            "chicken", "beef", "turkey", "pork", "steak", "shrimp", "salmon", "tofu", "eggs",
            "lentil", "chickpea", "protein powder",
        ],
    ),
    (
        Category::Dairy,
        &["milk", "yogurt", "cheese", "butter", "sour cream", "cream"],
    ),
    (
        Category::Produce,
        &[
            "tomato", "onion", "garlic", "pepper", "lettuce", "spinach", "kale", "broccoli",
            "asparagus", "carrot", "celery", "cucumber", "avocado", "banana", "apple", "lemon",
            "lime", "berries", "potato", "cilantro", "rosemary", "mixed greens",
        ],
    ),
    (
        Category::Grains,
        &["rice", "pasta", "bread", "tortilla", "oats", "quinoa", "granola"],
    ),
    (
        Category::Pantry,
        &[
            "oil", "sauce", "honey", "broth", "cumin", "hummus", "soy sauce", "sesame", "marinara",
        ],
    ),
    (Category::Frozen, &["frozen"]),
    (Category::Beverages, &["almond milk", "juice"]),
];

/// Categorization Service
///
/// Stateless service mapping ingredient names to shopping categories.
pub struct CategorizationService;

impl CategorizationService {
    /// Categorize an ingredient by name, defaulting to [`Category::Other`]
    pub fn categorize(ingredient_name: &str) -> Category {
        let normalized = ingredient_name.trim().to_lowercase();

        CATEGORY_RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| normalized.contains(*kw)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }
}
