//! # Grocery Aggregator
//!
//! Turns a weekly meal plan into a deduplicated, unit-normalized, categorized
//! and priced grocery list. Meals are expanded into ingredient lines by
//! keyword, ingredient names are normalized to canonical forms, quantities
//! are summed within their unit family, and each resulting line item carries
//! a best-effort price estimate.
//!
//! ```rust
//! use grocery_aggregator::{DayPlan, IngredientAggregator, MealPlan};
//!
//! let plan = MealPlan::new(vec![DayPlan::new("Monday")
//!     .with_breakfast("Oatmeal with Berries")
//!     .with_dinner("Shrimp Pasta")]);
//!
//! let items = IngredientAggregator::new().aggregate(&plan);
//! assert!(items.iter().any(|item| item.name == "Rolled Oats"));
//! ```

pub mod aggregator;
pub mod aggregator_config;
pub mod categorization;
pub mod errors;
pub mod ingredient_integration;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod meal_expander;
pub mod meal_plan;
pub mod measurement_patterns;
pub mod measurement_types;
pub mod pricing;
pub mod store_comparison;
pub mod text_processing;
pub mod unit_conversion;

pub use aggregator::IngredientAggregator;
pub use aggregator_config::{AggregatorConfig, PriceUnitPolicy};
pub use categorization::Category;
pub use errors::PlanError;
pub use ingredient_model::GroceryLineItem;
pub use meal_plan::{DayPlan, Meal, MealPlan};
