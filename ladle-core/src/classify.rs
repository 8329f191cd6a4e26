//! Ingredient classification for macro scaling.
//!
//! Maps ingredient records to scaling roles (protein-bearing, carb/fat,
//! non-scaling) based on keyword matching against tags and names, and
//! estimates volumetric density for cup display. Tags are checked before
//! names; the first matching keyword wins.

use crate::types::Ingredient;

/// Role an ingredient plays during scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientClass {
    /// Primarily contributes dietary protein (meats, fish, protein dairy).
    ProteinBearing,
    /// Primarily contributes carbohydrate or fat calories (grains, oils,
    /// starches, cheeses).
    CarbFat,
    /// Excluded from proportional scaling (seasonings, water, zero-calorie
    /// additions).
    NonScaling,
    Unclassified,
}

// =============================================================================
// Keyword tables
// =============================================================================

const PROTEIN_NAME_KEYWORDS: &[&str] = &[
    "chicken", "turkey", "beef", "sirloin", "steak", "pork", "ham", "salmon", "shrimp", "cod",
    "tuna", "tilapia", "fish", "egg", "tofu", "tempeh", "seitan", "whey", "protein",
    "greek yogurt", "cottage cheese", "edamame",
];

const PROTEIN_TAG_KEYWORDS: &[&str] = &["protein", "meat", "poultry", "seafood", "fish"];

const CARB_FAT_NAME_KEYWORDS: &[&str] = &[
    "rice", "pasta", "noodle", "bread", "tortilla", "wrap", "bagel", "oat", "granola", "quinoa",
    "farro", "couscous", "cereal", "potato", "butter", "oil", "avocado", "nut", "peanut",
    "almond", "cashew", "cheese", "cream", "milk", "honey", "maple", "sugar", "hummus",
];

const CARB_FAT_TAG_KEYWORDS: &[&str] = &["carb", "grain", "starch", "fat", "bread", "dairy"];

const NON_SCALING_NAME_KEYWORDS: &[&str] = &[
    "salt", "black pepper", "peppercorn", "spice", "seasoning", "cinnamon", "vanilla", "water",
    "ice", "lemon juice", "lime juice", "vinegar", "mustard", "hot sauce", "sriracha",
    "cooking spray", "garlic powder", "onion powder", "dried oregano", "dried basil", "stevia",
    "sweetener", "zero calorie",
];

const NON_SCALING_TAG_KEYWORDS: &[&str] = &["seasoning", "spice", "zero_cal", "water", "garnish"];

fn matches_keywords(ingredient: &Ingredient, tag_keywords: &[&str], name_keywords: &[&str]) -> bool {
    // Tags first: an explicit category label beats name sniffing.
    for tag in &ingredient.tags {
        let tag = tag.to_lowercase();
        if tag_keywords.iter().any(|k| tag.contains(k)) {
            return true;
        }
    }
    let name = ingredient.label().to_lowercase();
    name_keywords.iter().any(|k| name.contains(k))
}

// =============================================================================
// Classification
// =============================================================================

/// Does this ingredient match the protein-bearing patterns?
pub fn is_protein_bearing(ingredient: &Ingredient) -> bool {
    matches_keywords(ingredient, PROTEIN_TAG_KEYWORDS, PROTEIN_NAME_KEYWORDS)
}

/// Does this ingredient match the carb/fat patterns?
pub fn is_carb_fat(ingredient: &Ingredient) -> bool {
    matches_keywords(ingredient, CARB_FAT_TAG_KEYWORDS, CARB_FAT_NAME_KEYWORDS)
}

/// Does this ingredient match the non-scaling patterns?
pub fn is_non_scaling(ingredient: &Ingredient) -> bool {
    matches_keywords(ingredient, NON_SCALING_TAG_KEYWORDS, NON_SCALING_NAME_KEYWORDS)
}

/// Classify an ingredient into exactly one role.
///
/// Pattern sets are not mutually exclusive; overlap resolves in the order
/// protein, non-scaling, carb/fat. The scaling stages partition with the
/// individual predicates instead when they need a different precedence
/// (protein first in the protein stage, non-scaling first in the calorie
/// stage).
pub fn classify(ingredient: &Ingredient) -> IngredientClass {
    if is_protein_bearing(ingredient) {
        IngredientClass::ProteinBearing
    } else if is_non_scaling(ingredient) {
        IngredientClass::NonScaling
    } else if is_carb_fat(ingredient) {
        IngredientClass::CarbFat
    } else {
        IngredientClass::Unclassified
    }
}

// =============================================================================
// Density estimation
// =============================================================================

/// Fallback density when no keyword matches (roughly water-like).
const DEFAULT_GRAMS_PER_CUP: f64 = 240.0;

/// Keyword-to-density table, scanned in order. Earlier rows win, so
/// compound names like "cottage cheese" resolve before the bare "cheese"
/// row.
const DENSITY_TABLE: &[(&[&str], f64)] = &[
    (&["oat", "granola"], 80.0),
    (&["rice", "quinoa", "farro", "couscous"], 160.0),
    (
        &[
            "zucchini", "spinach", "broccoli", "pepper", "onion", "tomato", "carrot", "kale",
            "lettuce", "cucumber", "berr", "banana", "apple",
        ],
        140.0,
    ),
    (&["yogurt", "cottage cheese"], 245.0),
    (&["bean", "lentil", "chickpea", "edamame"], 170.0),
    (&["cheese"], 120.0),
    (&["avocado"], 150.0),
];

/// Assumed grams per US cup for an ingredient name.
///
/// This is a coarse heuristic for producing a readable cup measurement
/// alongside the gram amount, not a nutritional database.
pub fn grams_per_cup(name: &str) -> f64 {
    let name = name.to_lowercase();
    for (keywords, density) in DENSITY_TABLE {
        if keywords.iter().any(|k| name.contains(k)) {
            return *density;
        }
    }
    DEFAULT_GRAMS_PER_CUP
}
