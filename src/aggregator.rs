//! # Aggregator Module
//!
//! Orchestrates one aggregation run: every meal of the plan is expanded into
//! raw ingredient lines, the lines are grouped by canonical name, quantities
//! are summed per unit family, and each group becomes one priced, categorized
//! [`GroceryLineItem`].
//!
//! ## Usage
//!
//! ```rust
//! use grocery_aggregator::aggregator::IngredientAggregator;
//! use grocery_aggregator::meal_plan::{DayPlan, MealPlan};
//!
//! let plan = MealPlan::new(vec![
//!     DayPlan::new("Monday").with_dinner("Grilled Chicken Salad"),
//!     DayPlan::new("Tuesday").with_dinner("Grilled Chicken Salad"),
//! ]);
//!
//! let items = IngredientAggregator::new().aggregate(&plan);
//! let chicken = items.iter().find(|i| i.name == "Chicken Breast").unwrap();
//! assert_eq!(chicken.quantity, "2 lbs");
//! ```

use crate::aggregator_config::AggregatorConfig;
use crate::ingredient_model::{CanonicalGroup, GroceryLineItem, RawIngredientLine};
use crate::ingredient_parser::parse_quantity_string;
use crate::meal_expander::expand_meal;
use crate::meal_plan::MealPlan;
use crate::measurement_types::{ParsedQuantity, SubEntry, UnitFamily, DEFAULT_UNIT};
use crate::pricing::PriceEstimator;
use crate::text_processing::normalize_ingredient_name;
use crate::unit_conversion::{
    format_quantity_display, to_base, unit_family, volume_from_ml, weight_from_grams,
};
use log::{debug, info, warn};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Turns meal plans into deduplicated, priced grocery lists
#[derive(Debug, Clone)]
pub struct IngredientAggregator {
    config: AggregatorConfig,
    estimator: PriceEstimator,
}

impl IngredientAggregator {
    /// Create an aggregator with default configuration
    pub fn new() -> Self {
        Self::with_config(AggregatorConfig::default())
    }

    /// Create an aggregator with custom configuration
    pub fn with_config(config: AggregatorConfig) -> Self {
        let estimator = PriceEstimator::new(
            config.price_floor,
            config.price_ceiling,
            config.price_unit_policy,
        );
        Self { config, estimator }
    }

    /// Aggregate a whole meal plan into a sorted grocery list
    ///
    /// An empty plan yields an empty list.
    pub fn aggregate(&self, plan: &MealPlan) -> Vec<GroceryLineItem> {
        if plan.is_empty() {
            debug!("Empty meal plan, nothing to aggregate");
            return Vec::new();
        }

        let lines = self.extract_lines(plan);
        self.aggregate_lines(lines)
    }

    /// Expand every populated meal of the plan into source-tagged lines
    pub fn extract_lines(&self, plan: &MealPlan) -> Vec<RawIngredientLine> {
        let mut lines = Vec::new();
        let mut meal_count = 0;

        for meal in plan.all_meals() {
            if meal.name.trim().is_empty() {
                warn!("Skipping meal with an empty name");
                continue;
            }
            meal_count += 1;
            lines.extend(
                expand_meal(&meal.name, &self.config.fallback_quantity)
                    .into_iter()
                    .map(|line| line.with_source_meal(&meal.name)),
            );
        }

        info!(
            "Expanded {} meals into {} ingredient lines",
            meal_count,
            lines.len()
        );
        lines
    }

    /// Group, sum, price and sort already-expanded ingredient lines
    pub fn aggregate_lines<I>(&self, lines: I) -> Vec<GroceryLineItem>
    where
        I: IntoIterator<Item = RawIngredientLine>,
    {
        let groups = group_lines(lines);
        let mut items: Vec<GroceryLineItem> =
            groups.iter().map(|group| self.build_line_item(group)).collect();

        items.sort_by(compare_line_items);
        info!("Aggregated {} grocery line items", items.len());
        items
    }

    fn build_line_item(&self, group: &CanonicalGroup) -> GroceryLineItem {
        let sub_entries = sum_quantities(&group.quantities);
        let quantity = format_sub_entries(&sub_entries);

        // sum_quantities never returns an empty list
        let primary = &sub_entries[0];
        let price = self.estimator.estimate(
            &group.name,
            primary.magnitude,
            &primary.unit,
            group.category,
        );

        debug!(
            "Group '{}': {} lines -> {} (${:.2})",
            group.name,
            group.quantities.len(),
            quantity,
            price
        );

        GroceryLineItem::new(&group.name, group.category, &quantity)
            .with_price(price)
            .with_source_meal(&group.provenance(self.config.max_source_meals))
    }
}

impl Default for IngredientAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Group lines by canonical name, keeping first-seen order
///
/// The first line of a group decides its category.
pub fn group_lines<I>(lines: I) -> Vec<CanonicalGroup>
where
    I: IntoIterator<Item = RawIngredientLine>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<CanonicalGroup> = Vec::new();

    for line in lines {
        let name = normalize_ingredient_name(&line.name);
        let position = *index.entry(name.clone()).or_insert_with(|| {
            groups.push(CanonicalGroup::new(&name, line.category));
            groups.len() - 1
        });
        groups[position].add(parse_quantity_string(&line.quantity), &line.source_meal);
    }

    groups
}

/// Sum quantities within unit families
///
/// Volume and weight are summed through their base units and converted back
/// to a display unit. Count and unknown units are summed per exact unit
/// string. Sub-entries come out as volume, weight, count buckets, unknown
/// buckets; with no input the result is a single "1 each".
pub fn sum_quantities(quantities: &[ParsedQuantity]) -> Vec<SubEntry> {
    let mut volume_ml: Option<f64> = None;
    let mut weight_g: Option<f64> = None;
    let mut counts: Vec<(String, f64)> = Vec::new();
    let mut unknowns: Vec<(String, f64)> = Vec::new();

    for quantity in quantities {
        let unit = quantity.unit.trim().to_lowercase();
        match unit_family(&unit) {
            UnitFamily::Volume | UnitFamily::Weight => {
                if let Some((base, family)) = to_base(quantity.magnitude, &unit) {
                    let total = if family == UnitFamily::Volume {
                        &mut volume_ml
                    } else {
                        &mut weight_g
                    };
                    *total = Some(total.unwrap_or(0.0) + base);
                }
            }
            UnitFamily::Count => add_to_bucket(&mut counts, unit, quantity.magnitude),
            UnitFamily::Unknown => add_to_bucket(&mut unknowns, unit, quantity.magnitude),
        }
    }

    let mut entries = Vec::new();
    if let Some(total) = volume_ml {
        entries.push(volume_from_ml(total));
    }
    if let Some(total) = weight_g {
        entries.push(weight_from_grams(total));
    }
    entries.extend(
        counts
            .into_iter()
            .map(|(unit, total)| SubEntry::new(total, &unit, UnitFamily::Count)),
    );
    entries.extend(
        unknowns
            .into_iter()
            .map(|(unit, total)| SubEntry::new(total, &unit, UnitFamily::Unknown)),
    );

    if entries.is_empty() {
        entries.push(SubEntry::new(1.0, DEFAULT_UNIT, UnitFamily::Count));
    }
    entries
}

fn add_to_bucket(buckets: &mut Vec<(String, f64)>, unit: String, magnitude: f64) {
    match buckets.iter_mut().find(|(existing, _)| *existing == unit) {
        Some((_, total)) => *total += magnitude,
        None => buckets.push((unit, magnitude)),
    }
}

/// Render sub-entries as "1½ cups + 2 each"
pub fn format_sub_entries(entries: &[SubEntry]) -> String {
    entries
        .iter()
        .map(|entry| format_quantity_display(entry.magnitude, &entry.unit))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Category name, then ingredient name, both alphabetical
fn compare_line_items(a: &GroceryLineItem, b: &GroceryLineItem) -> Ordering {
    a.category
        .as_str()
        .cmp(b.category.as_str())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator_config::{PriceUnitPolicy, PRICE_CEILING, PRICE_FLOOR};
    use crate::categorization::Category;
    use crate::meal_plan::DayPlan;

    fn line(name: &str, category: Category, quantity: &str, meal: &str) -> RawIngredientLine {
        RawIngredientLine::new(name, category, quantity).with_source_meal(meal)
    }

    #[test]
    fn test_empty_plan_yields_empty_list() {
        let aggregator = IngredientAggregator::new();
        assert!(aggregator.aggregate(&MealPlan::default()).is_empty());
        assert!(aggregator.aggregate_lines(Vec::new()).is_empty());
    }

    #[test]
    fn test_count_units_are_summed() {
        let aggregator = IngredientAggregator::new();
        let items = aggregator.aggregate_lines(vec![
            line("eggs", Category::Protein, "2", "Omelette"),
            line("egg", Category::Protein, "1", "Fried Rice"),
        ]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Eggs");
        assert_eq!(items[0].quantity, "3 each");
        assert_eq!(items[0].source_meal, "Omelette, Fried Rice");
    }

    #[test]
    fn test_volume_units_share_one_sub_entry() {
        let aggregator = IngredientAggregator::new();
        let items = aggregator.aggregate_lines(vec![
            line("Milk", Category::Dairy, "1 cup", "Pancakes"),
            line("Milk", Category::Dairy, "1 gallon", "Smoothie"),
        ]);

        // 240 ml + 3785 ml = 16.8 cups
        assert_eq!(items[0].quantity, "16¾ cups");
    }

    #[test]
    fn test_families_are_never_merged() {
        let aggregator = IngredientAggregator::new();
        let items = aggregator.aggregate_lines(vec![
            line("chicken breast", Category::Protein, "2 lbs", "Roast"),
            line("Chicken Breast", Category::Protein, "3 each", "Skewers"),
        ]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, "2 lbs + 3 each");
        // Weight is the primary sub-entry: 2 x $4.29
        assert_eq!(items[0].estimated_price, 8.58);
    }

    #[test]
    fn test_sub_entry_order() {
        let entries = sum_quantities(&[
            ParsedQuantity::new(2.0, "handful"),
            ParsedQuantity::new(3.0, "cloves"),
            ParsedQuantity::new(1.0, "head"),
            ParsedQuantity::new(4.0, "oz"),
            ParsedQuantity::new(2.0, "tbsp"),
            ParsedQuantity::new(1.0, "Cloves"),
        ]);

        let summary: Vec<(f64, &str)> = entries
            .iter()
            .map(|e| (e.magnitude, e.unit.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![(2.0, "tbsp"), (4.0, "oz"), (4.0, "cloves"), (1.0, "head"), (2.0, "handful")]
        );
        assert_eq!(entries[4].family, UnitFamily::Unknown);
    }

    #[test]
    fn test_no_quantities_is_one_each() {
        let entries = sum_quantities(&[]);
        assert_eq!(entries, vec![SubEntry::new(1.0, "each", UnitFamily::Count)]);
        assert_eq!(format_sub_entries(&entries), "1 each");
    }

    #[test]
    fn test_group_without_quantities_is_priced_as_one_each() {
        let aggregator = IngredientAggregator::new();
        let group = CanonicalGroup::new("Dragon Fruit", Category::Produce);
        let item = aggregator.build_line_item(&group);

        assert_eq!(item.quantity, "1 each");
        // Produce fallback for one unit
        assert_eq!(item.estimated_price, 2.49);
    }

    #[test]
    fn test_first_category_wins() {
        let aggregator = IngredientAggregator::new();
        let items = aggregator.aggregate_lines(vec![
            line("Granola", Category::Pantry, "0.25 cup", "Yogurt Parfait"),
            line("Granola", Category::Grains, "1 cup", "Granola Bowl"),
        ]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, Category::Pantry);
        assert_eq!(items[0].quantity, "1¼ cups");
    }

    #[test]
    fn test_provenance_capped_and_unique() {
        let aggregator = IngredientAggregator::new();
        let meals = ["Soup", "Stew", "Soup", "Curry", "Chili"];
        let lines = meals
            .iter()
            .map(|meal| line("Onions", Category::Produce, "1 each", meal));
        let items = aggregator.aggregate_lines(lines);

        assert_eq!(items[0].source_meal, "Soup, Stew, Curry");
        assert_eq!(items[0].quantity, "5 each");
    }

    #[test]
    fn test_max_source_meals_is_configurable() {
        let config = AggregatorConfig {
            max_source_meals: 1,
            ..AggregatorConfig::default()
        };
        let aggregator = IngredientAggregator::with_config(config);
        let items = aggregator.aggregate_lines(vec![
            line("Onions", Category::Produce, "1 each", "Soup"),
            line("Onions", Category::Produce, "1 each", "Stew"),
        ]);
        assert_eq!(items[0].source_meal, "Soup");
    }

    #[test]
    fn test_sorted_by_category_then_name() {
        let aggregator = IngredientAggregator::new();
        let plan = MealPlan::new(vec![DayPlan::new("Monday")
            .with_breakfast("Oatmeal with Berries")
            .with_lunch("Turkey Wrap")
            .with_dinner("Shrimp Pasta")
            .with_snack("Apple")
            .with_dessert("Zzzblorpmeal123")]);
        let items = aggregator.aggregate(&plan);

        assert!(!items.is_empty());
        for pair in items.windows(2) {
            assert_ne!(
                compare_line_items(&pair[0], &pair[1]),
                Ordering::Greater,
                "'{}' sorted before '{}'",
                pair[0].name,
                pair[1].name
            );
        }
        assert_eq!(items[0].category, Category::Dairy);
    }

    #[test]
    fn test_names_are_unique() {
        let aggregator = IngredientAggregator::new();
        let plan = MealPlan::new(vec![
            DayPlan::new("Monday")
                .with_breakfast("Avocado Toast with Egg")
                .with_lunch("Chicken Stir-Fry with Rice")
                .with_dinner("Garlic Shrimp Pasta"),
            DayPlan::new("Tuesday")
                .with_breakfast("Veggie Omelet")
                .with_lunch("Lentil Soup with Bread")
                .with_dinner("Beef Tacos"),
        ]);
        let items = aggregator.aggregate(&plan);

        let mut names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
        assert!(items.iter().all(|i| !i.is_purchased));
    }

    #[test]
    fn test_empty_meal_names_are_skipped() {
        let aggregator = IngredientAggregator::new();
        let plan = MealPlan::new(vec![DayPlan::new("Monday")
            .with_breakfast("")
            .with_lunch("   ")
            .with_dinner("Banana")]);

        let lines = aggregator.extract_lines(&plan);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].source_meal, "Banana");
    }

    #[test]
    fn test_prices_within_bounds() {
        let aggregator = IngredientAggregator::new();
        let plan = MealPlan::new(
            (0..7)
                .map(|_| {
                    DayPlan::new("Day")
                        .with_breakfast("Steak and Eggs")
                        .with_lunch("Steak Salad")
                        .with_dinner("Ribeye Steak Dinner")
                        .with_snack("Cumin Crackers")
                })
                .collect(),
        );
        for item in aggregator.aggregate(&plan) {
            assert!(
                (PRICE_FLOOR..=PRICE_CEILING).contains(&item.estimated_price),
                "{} priced at {}",
                item.name,
                item.estimated_price
            );
        }
    }

    #[test]
    fn test_price_unit_policy_flows_through() {
        let lines = || vec![line("Olive Oil", Category::Pantry, "1 cup", "Dressing")];

        let as_parsed = IngredientAggregator::new().aggregate_lines(lines());
        assert_eq!(as_parsed[0].estimated_price, PRICE_FLOOR);

        let converting = IngredientAggregator::with_config(AggregatorConfig {
            price_unit_policy: PriceUnitPolicy::ConvertToReference,
            ..AggregatorConfig::default()
        });
        let converted = converting.aggregate_lines(lines());
        assert_eq!(converted[0].estimated_price, 4.8);
    }
}
