//! # Meal Plan Module
//!
//! The weekly meal plan the aggregator consumes. Only meal names drive
//! aggregation; nutrition fields are carried so a plan document round-trips,
//! but are otherwise ignored.
//!
//! Plan documents are decoded leniently: a document may be `{"meals": [...]}`
//! or a bare array of days, meal slots may be missing or `null`, `null`
//! entries in `snacks` or the day list are dropped, and a `null` meal name
//! decodes as empty so the aggregator skips that meal. Anything else that does
//! not fit keeps serde_json's own error, with its line and column.
//!
//! ## Usage
//!
//! ```rust
//! use grocery_aggregator::meal_plan::MealPlan;
//!
//! let plan = MealPlan::from_json_str(
//!     r#"{"meals": [{"day": "Monday", "dinner": {"name": "Shrimp Pasta"}}]}"#,
//! ).unwrap();
//! assert_eq!(plan.meal_count(), 1);
//! ```

use crate::errors::PlanError;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A single meal; `name` is the only field aggregation reads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fats: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
}

impl Meal {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// One day of the plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(default, deserialize_with = "null_as_default")]
    pub day: String,

    #[serde(default)]
    pub breakfast: Option<Meal>,

    #[serde(default)]
    pub lunch: Option<Meal>,

    #[serde(default)]
    pub dinner: Option<Meal>,

    #[serde(default, deserialize_with = "present_items")]
    pub snacks: Vec<Meal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dessert: Option<Meal>,
}

impl DayPlan {
    pub fn new(day: &str) -> Self {
        Self {
            day: day.to_string(),
            ..Self::default()
        }
    }

    pub fn with_breakfast(mut self, name: &str) -> Self {
        self.breakfast = Some(Meal::new(name));
        self
    }

    pub fn with_lunch(mut self, name: &str) -> Self {
        self.lunch = Some(Meal::new(name));
        self
    }

    pub fn with_dinner(mut self, name: &str) -> Self {
        self.dinner = Some(Meal::new(name));
        self
    }

    pub fn with_snack(mut self, name: &str) -> Self {
        self.snacks.push(Meal::new(name));
        self
    }

    pub fn with_dessert(mut self, name: &str) -> Self {
        self.dessert = Some(Meal::new(name));
        self
    }

    /// Populated meals in extraction order: breakfast, lunch, dinner, each
    /// snack, then dessert
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
            .chain(self.snacks.iter())
            .chain(self.dessert.iter())
    }
}

/// A weekly meal plan
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MealPlan {
    pub meals: Vec<DayPlan>,
}

// Dispatches on the top-level shape so nested errors reach the caller intact
impl<'de> Deserialize<'de> for MealPlan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PlanVisitor)
    }
}

struct PlanVisitor;

impl<'de> Visitor<'de> for PlanVisitor {
    type Value = MealPlan;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a meal plan object or an array of days")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<MealPlan, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut days = Vec::new();
        while let Some(day) = seq.next_element::<Option<DayPlan>>()? {
            days.extend(day);
        }
        Ok(MealPlan::new(days))
    }

    fn visit_map<A>(self, mut map: A) -> Result<MealPlan, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut days: Option<Vec<DayPlan>> = None;
        while let Some(key) = map.next_key::<String>()? {
            if key != "meals" {
                map.next_value::<IgnoredAny>()?;
                continue;
            }
            if days.is_some() {
                return Err(de::Error::duplicate_field("meals"));
            }
            let entries: Option<Vec<Option<DayPlan>>> = map.next_value()?;
            days = Some(entries.into_iter().flatten().flatten().collect());
        }
        Ok(MealPlan::new(days.unwrap_or_default()))
    }
}

impl MealPlan {
    pub fn new(days: Vec<DayPlan>) -> Self {
        Self { meals: days }
    }

    /// Decode a plan from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a plan from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PlanError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read and decode a plan file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PlanError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Number of populated meal slots across all days
    pub fn meal_count(&self) -> usize {
        self.meals.iter().map(|day| day.meals().count()).sum()
    }

    /// Every populated meal, day by day, in extraction order
    pub fn all_meals(&self) -> impl Iterator<Item = &Meal> {
        self.meals.iter().flat_map(DayPlan::meals)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A list that may be `null` or hold `null` entries, keeping only the values
fn present_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items.into_iter().flatten().flatten().collect())
}
