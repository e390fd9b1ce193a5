//! # Unit Conversion Module
//!
//! Table-driven unit families and conversions. Volume units are summed in
//! milliliters, weight units in grams; count and unknown units are never
//! converted. Summed base quantities are turned back into a friendly display
//! unit ("cups" once past one cup, "lbs" once past one pound).

use crate::measurement_types::{SubEntry, UnitFamily, DEFAULT_UNIT};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Milliliters per cup
pub const ML_PER_CUP: f64 = 240.0;
/// Milliliters per tablespoon
pub const ML_PER_TBSP: f64 = 15.0;
/// Milliliters per teaspoon
pub const ML_PER_TSP: f64 = 5.0;
/// Grams per pound
pub const G_PER_LB: f64 = 453.59;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.35;

/// Volume unit -> milliliters
static VOLUME_TO_ML: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert("ml", 1.0);
    map.insert("milliliter", 1.0);
    map.insert("milliliters", 1.0);
    map.insert("tsp", ML_PER_TSP);
    map.insert("teaspoon", ML_PER_TSP);
    map.insert("teaspoons", ML_PER_TSP);
    map.insert("tbsp", ML_PER_TBSP);
    map.insert("tablespoon", ML_PER_TBSP);
    map.insert("tablespoons", ML_PER_TBSP);
    map.insert("fl oz", 30.0);
    map.insert("fluid ounce", 30.0);
    map.insert("fluid ounces", 30.0);
    map.insert("cup", ML_PER_CUP);
    map.insert("cups", ML_PER_CUP);
    map.insert("pint", 480.0);
    map.insert("pints", 480.0);
    map.insert("quart", 960.0);
    map.insert("quarts", 960.0);
    map.insert("liter", 1000.0);
    map.insert("liters", 1000.0);
    map.insert("litre", 1000.0);
    map.insert("litres", 1000.0);
    map.insert("l", 1000.0);
    map.insert("gallon", 3785.0);
    map.insert("gallons", 3785.0);

    map
});

/// Weight unit -> grams
static WEIGHT_TO_G: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert("g", 1.0);
    map.insert("gram", 1.0);
    map.insert("grams", 1.0);
    map.insert("oz", G_PER_OZ);
    map.insert("ounce", G_PER_OZ);
    map.insert("ounces", G_PER_OZ);
    map.insert("lb", G_PER_LB);
    map.insert("lbs", G_PER_LB);
    map.insert("pound", G_PER_LB);
    map.insert("pounds", G_PER_LB);
    map.insert("kg", 1000.0);
    map.insert("kilogram", 1000.0);
    map.insert("kilograms", 1000.0);

    map
});

/// Discrete and packaging units
static COUNT_UNITS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "each", "whole", "piece", "pieces", "clove", "cloves", "sprig", "sprigs", "stalk",
        "stalks", "head", "heads", "slice", "slices", "leaf", "leaves", "bunch", "bunches", "can",
        "cans", "jar", "jars", "pack", "packs", "bag", "bags", "block", "blocks", "scoop",
        "scoops", "serving", "servings", "loaf", "loaves", "unit",
    ]
    .into_iter()
    .collect()
});

/// Classify a unit token into its family
pub fn unit_family(unit: &str) -> UnitFamily {
    let unit = unit.trim().to_lowercase();
    if VOLUME_TO_ML.contains_key(unit.as_str()) {
        UnitFamily::Volume
    } else if WEIGHT_TO_G.contains_key(unit.as_str()) {
        UnitFamily::Weight
    } else if COUNT_UNITS.contains(unit.as_str()) {
        UnitFamily::Count
    } else {
        UnitFamily::Unknown
    }
}

/// Base-unit factor for a volume or weight unit (ml or g per unit)
pub fn base_factor(unit: &str) -> Option<f64> {
    let unit = unit.trim().to_lowercase();
    VOLUME_TO_ML
        .get(unit.as_str())
        .or_else(|| WEIGHT_TO_G.get(unit.as_str()))
        .copied()
}

/// Convert a magnitude to its family's base unit
///
/// Returns `None` for count and unknown units, which are never converted.
pub fn to_base(magnitude: f64, unit: &str) -> Option<(f64, UnitFamily)> {
    let family = unit_family(unit);
    match family {
        UnitFamily::Volume | UnitFamily::Weight => {
            base_factor(unit).map(|factor| (magnitude * factor, family))
        }
        UnitFamily::Count | UnitFamily::Unknown => None,
    }
}

/// Convert a magnitude between two units of the same convertible family
pub fn convert(magnitude: f64, from: &str, to: &str) -> Option<f64> {
    let family = unit_family(from);
    if !matches!(family, UnitFamily::Volume | UnitFamily::Weight) || unit_family(to) != family {
        return None;
    }
    Some(magnitude * base_factor(from)? / base_factor(to)?)
}

/// Turn a summed millilitre total into cups, tbsp or tsp
///
/// Magnitudes are rounded to one decimal place.
pub fn volume_from_ml(ml: f64) -> SubEntry {
    let (divisor, unit) = if ml >= ML_PER_CUP {
        (ML_PER_CUP, "cups")
    } else if ml >= ML_PER_TBSP {
        (ML_PER_TBSP, "tbsp")
    } else {
        (ML_PER_TSP, "tsp")
    };
    SubEntry::new(round_to_tenth(ml / divisor), unit, UnitFamily::Volume)
}

/// Turn a summed gram total into lbs, oz or whole grams
pub fn weight_from_grams(grams: f64) -> SubEntry {
    if grams >= G_PER_LB {
        SubEntry::new(round_to_tenth(grams / G_PER_LB), "lbs", UnitFamily::Weight)
    } else if grams >= G_PER_OZ {
        SubEntry::new(round_to_tenth(grams / G_PER_OZ), "oz", UnitFamily::Weight)
    } else {
        SubEntry::new(grams.round(), "g", UnitFamily::Weight)
    }
}

/// Render a magnitude and unit with quarter glyphs ("1½ cups", "¾ tsp")
///
/// The magnitude is rounded to the nearest quarter; a result of zero renders
/// as "1" so a line item never asks for nothing.
pub fn format_quantity_display(magnitude: f64, unit: &str) -> String {
    let unit = if unit.is_empty() { DEFAULT_UNIT } else { unit };
    let quarters = (magnitude * 4.0).round() as i64;
    let whole = quarters / 4;
    let glyph = match quarters % 4 {
        1 => "¼",
        2 => "½",
        3 => "¾",
        _ => "",
    };

    let number = match (whole, glyph) {
        (0, "") => "1".to_string(),
        (0, glyph) => glyph.to_string(),
        (whole, glyph) => format!("{}{}", whole, glyph),
    };
    format!("{} {}", number, unit)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
