#[cfg(test)]
mod tests {
    use grocery_aggregator::categorization::Category;
    use grocery_aggregator::ingredient_model::{GroceryLineItem, RawIngredientLine};
    use grocery_aggregator::{AggregatorConfig, DayPlan, IngredientAggregator, MealPlan};

    const SAMPLE_PLAN: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_plan.json");

    fn sample_items() -> Vec<GroceryLineItem> {
        let plan = MealPlan::load(SAMPLE_PLAN).unwrap();
        IngredientAggregator::new().aggregate(&plan)
    }

    fn find<'a>(items: &'a [GroceryLineItem], name: &str) -> &'a GroceryLineItem {
        items
            .iter()
            .find(|item| item.name == name)
            .unwrap_or_else(|| panic!("Missing line item '{}'", name))
    }

    fn same_dinner_every_day(dinner: &str) -> MealPlan {
        let days = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
        MealPlan::new(days.iter().map(|day| DayPlan::new(day).with_dinner(dinner)).collect())
    }

    #[test]
    fn test_empty_plan() {
        let plan = MealPlan::from_json_str(r#"{"meals": []}"#).unwrap();
        assert!(IngredientAggregator::new().aggregate(&plan).is_empty());
    }

    #[test]
    fn test_same_dinner_all_week() {
        let plan = same_dinner_every_day("Grilled Chicken Salad");
        let items = IngredientAggregator::new().aggregate(&plan);

        let chicken: Vec<_> = items.iter().filter(|i| i.name == "Chicken Breast").collect();
        assert_eq!(chicken.len(), 1);
        assert_eq!(chicken[0].quantity, "7 lbs");
        assert_eq!(chicken[0].category, Category::Protein);
        assert_eq!(chicken[0].source_meal, "Grilled Chicken Salad");
        assert_eq!(chicken[0].estimated_price, 30.03);

        // Olive oil appears in both "chicken" and "salad"; the first wins per meal
        assert_eq!(find(&items, "Olive Oil").quantity, "14 tbsp");
        assert_eq!(find(&items, "Garlic").quantity, "21 cloves");
        assert_eq!(find(&items, "Onions").quantity, "7 each");
        assert_eq!(find(&items, "Romaine Lettuce").quantity, "7 head");
    }

    #[test]
    fn test_unknown_meal_becomes_single_line() {
        let plan = MealPlan::new(vec![DayPlan::new("Monday").with_lunch("Zzzblorpmeal123")]);
        let items = IngredientAggregator::new().aggregate(&plan);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Zzzblorpmeal123");
        assert_eq!(items[0].category, Category::Other);
        assert_eq!(items[0].quantity, "1 serving");
        assert_eq!(items[0].estimated_price, 3.49);
        assert_eq!(items[0].source_meal, "Zzzblorpmeal123");
    }

    #[test]
    fn test_fallback_quantity_is_configurable() {
        let aggregator = IngredientAggregator::with_config(AggregatorConfig {
            fallback_quantity: "2 servings".to_string(),
            ..AggregatorConfig::default()
        });
        let plan = MealPlan::new(vec![DayPlan::new("Monday").with_lunch("Mystery Meal")]);
        let items = aggregator.aggregate(&plan);

        assert_eq!(items[0].quantity, "2 servings");
    }

    #[test]
    fn test_eggs_from_different_meals_group_together() {
        let items = IngredientAggregator::new().aggregate_lines(vec![
            RawIngredientLine::new("2 eggs", Category::Protein, "2")
                .with_source_meal("Breakfast Tacos"),
            RawIngredientLine::new("1 egg", Category::Protein, "1").with_source_meal("Fried Rice"),
        ]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Eggs");
        assert_eq!(items[0].quantity, "3 each");
    }

    #[test]
    fn test_cup_and_gallon_of_milk_sum() {
        let items = IngredientAggregator::new().aggregate_lines(vec![
            RawIngredientLine::new("milk", Category::Dairy, "1 cup").with_source_meal("Cereal"),
            RawIngredientLine::new("milk", Category::Dairy, "1 gallon").with_source_meal("Baking"),
        ]);

        assert_eq!(items.len(), 1);
        assert!(!items[0].quantity.contains('+'));
        assert_eq!(items[0].quantity, "16¾ cups");
    }

    #[test]
    fn test_weight_and_count_stay_separate() {
        let items = IngredientAggregator::new().aggregate_lines(vec![
            RawIngredientLine::new("chicken breast", Category::Protein, "2 lbs"),
            RawIngredientLine::new("chicken breasts", Category::Protein, "3 each"),
        ]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, "2 lbs + 3 each");
        assert_eq!(items[0].source_meal, "");
    }

    #[test]
    fn test_sample_plan_list_is_sorted_and_unique() {
        let items = sample_items();
        assert!(!items.is_empty());

        for pair in items.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let key_a = (a.category.as_str(), a.name.to_lowercase());
            let key_b = (b.category.as_str(), b.name.to_lowercase());
            assert!(key_a < key_b, "'{}' should sort after '{}'", a.name, b.name);
        }
    }

    #[test]
    fn test_sample_plan_items_are_well_formed() {
        for item in sample_items() {
            assert!(!item.name.is_empty());
            assert!(!item.quantity.is_empty());
            assert!((0.49..=35.0).contains(&item.estimated_price), "{}", item);
            assert!(item.source_meal.split(", ").count() <= 3, "{}", item);
            assert!(!item.is_purchased);
        }
    }

    #[test]
    fn test_sample_plan_chicken() {
        let items = sample_items();
        let chicken = find(&items, "Chicken Breast");

        assert_eq!(chicken.quantity, "4 lbs");
        assert_eq!(chicken.estimated_price, 17.16);
        assert_eq!(
            chicken.source_meal,
            "Grilled Chicken Salad, Chicken Stir-Fry with Rice, Chicken Caesar Wrap"
        );
    }

    #[test]
    fn test_sample_plan_snack_fallbacks() {
        let items = sample_items();
        for snack in ["Mixed Nuts", "Orange", "Pear", "Grapes"] {
            let item = find(&items, snack);
            assert_eq!(item.category, Category::Other);
            assert_eq!(item.quantity, "1 serving");
            assert_eq!(item.source_meal, snack);
        }
    }

    #[test]
    fn test_plan_with_null_entries_still_aggregates() {
        let json = r#"{"meals": [{
            "day": "Monday",
            "lunch": {"name": null},
            "dinner": {"name": "Shrimp Pasta"},
            "snacks": [null, {"name": "Banana"}]
        }]}"#;
        let plan = MealPlan::from_json_str(json).unwrap();
        let items = IngredientAggregator::new().aggregate(&plan);

        assert_eq!(find(&items, "Shrimp").source_meal, "Shrimp Pasta");
        assert_eq!(find(&items, "Bananas").source_meal, "Banana");
        assert!(items.iter().all(|i| i.name != "Unknown Item"));
    }
}
