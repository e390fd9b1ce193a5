//! # Ingredient and Grocery Data Model
//!
//! Data structures that flow through one aggregation run, from the raw lines a
//! meal expands into, through the per-ingredient accumulator, to the priced
//! grocery line items handed to callers.
//!
//! ## Core Concepts
//!
//! - **RawIngredientLine**: one ingredient mention produced by expanding a meal
//! - **CanonicalGroup**: every mention that normalized to the same name
//! - **GroceryLineItem**: the final, priced and categorized shopping-list entry
//!
//! ## Usage
//!
//! ```rust
//! use grocery_aggregator::categorization::Category;
//! use grocery_aggregator::ingredient_model::GroceryLineItem;
//!
//! let item = GroceryLineItem::new("Eggs", Category::Protein, "6 each")
//!     .with_price(2.10)
//!     .with_source_meal("Veggie Omelette");
//! assert!(!item.is_purchased);
//! ```

use crate::categorization::Category;
use crate::measurement_types::ParsedQuantity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One ingredient mention, tagged with the meal it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIngredientLine {
    /// Canonical ingredient name
    pub name: String,

    /// Category supplied by the expansion table or the classifier
    pub category: Category,

    /// Free-text quantity ("2 tbsp", "1 serving")
    pub quantity: String,

    /// Display name of the meal this line was expanded from
    pub source_meal: String,
}

impl RawIngredientLine {
    pub fn new(name: &str, category: Category, quantity: &str) -> Self {
        Self {
            name: name.to_string(),
            category,
            quantity: quantity.to_string(),
            source_meal: String::new(),
        }
    }

    /// Tag the line with its source meal
    pub fn with_source_meal(mut self, meal_name: &str) -> Self {
        self.source_meal = meal_name.to_string();
        self
    }
}

/// Accumulator for every raw line sharing one canonical name
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalGroup {
    pub name: String,

    /// Category of the first line that created the group
    pub category: Category,

    /// Distinct source meals in first-seen order
    pub source_meals: Vec<String>,

    /// Parsed quantities of every contributing line
    pub quantities: Vec<ParsedQuantity>,
}

impl CanonicalGroup {
    pub fn new(name: &str, category: Category) -> Self {
        Self {
            name: name.to_string(),
            category,
            source_meals: Vec::new(),
            quantities: Vec::new(),
        }
    }

    /// Record one contributing line
    pub fn add(&mut self, quantity: ParsedQuantity, source_meal: &str) {
        self.quantities.push(quantity);
        if !source_meal.is_empty() && !self.source_meals.iter().any(|m| m == source_meal) {
            self.source_meals.push(source_meal.to_string());
        }
    }

    /// The first `limit` source meals joined by ", "
    pub fn provenance(&self, limit: usize) -> String {
        self.source_meals
            .iter()
            .take(limit)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A priced, categorized shopping-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryLineItem {
    /// Canonical name, unique within one generated list
    pub name: String,

    pub category: Category,

    /// Composite display quantity ("1½ cups + 2 each")
    pub quantity: String,

    /// Estimated price in dollars, always within the configured bounds
    pub estimated_price: f64,

    /// Up to three source meals joined by ", "
    pub source_meal: String,

    /// Always false on creation
    pub is_purchased: bool,
}

impl GroceryLineItem {
    pub fn new(name: &str, category: Category, quantity: &str) -> Self {
        Self {
            name: name.to_string(),
            category,
            quantity: quantity.to_string(),
            estimated_price: 0.0,
            source_meal: String::new(),
            is_purchased: false,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.estimated_price = price;
        self
    }

    pub fn with_source_meal(mut self, source_meal: &str) -> Self {
        self.source_meal = source_meal.to_string();
        self
    }

    /// Check or uncheck the item on the shopping list
    pub fn mark_purchased(&mut self, purchased: bool) {
        self.is_purchased = purchased;
    }
}

impl fmt::Display for GroceryLineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.is_purchased { "x" } else { " " };
        write!(
            f,
            "[{}] {} - {} ({}) ${:.2}",
            check, self.name, self.quantity, self.category, self.estimated_price
        )?;

        if !self.source_meal.is_empty() {
            write!(f, " [{}]", self.source_meal)?;
        }

        Ok(())
    }
}
