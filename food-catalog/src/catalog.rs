//! Embedded food catalog lookup.
//!
//! Foods are stored as per-100 g calorie/protein values. Data sourced from
//! USDA FoodData Central (cooked entries where applicable) with pinned
//! overrides for items whose search results are unreliable.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown food key: {0}")]
    UnknownFood(String),

    #[error("Unknown swap group: {0}")]
    UnknownGroup(String),
}

/// Macro values per 100 grams.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Per100 {
    pub kcal: f64,
    pub protein: f64,
}

/// One catalog entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Food {
    /// Display name (e.g. "Chicken breast, cooked").
    pub name: String,
    pub per100: Per100,
    /// Grams per US cup, present only for foods sanely measured by volume.
    #[serde(default)]
    pub grams_per_cup: Option<f64>,
    /// Category tags consumed by the ingredient classifier.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Food {
    /// Calories and protein for a given gram amount.
    pub fn macros_for(&self, grams: f64) -> (f64, f64) {
        (
            self.per100.kcal * grams / 100.0,
            self.per100.protein * grams / 100.0,
        )
    }
}

/// The raw JSON structure of the catalog data file.
#[derive(Deserialize)]
struct CatalogFile {
    ingredients: HashMap<String, Food>,
    #[serde(rename = "swapGroups")]
    swap_groups: HashMap<String, Vec<String>>,
}

static CATALOG: LazyLock<CatalogFile> = LazyLock::new(|| {
    serde_json::from_str(include_str!("data/catalog.json"))
        .expect("catalog.json should be valid JSON")
});

/// Look up a food by its catalog key (e.g. "chicken_breast_cooked").
pub fn get_food(key: &str) -> Result<&'static Food, CatalogError> {
    CATALOG
        .ingredients
        .get(key)
        .ok_or_else(|| CatalogError::UnknownFood(key.to_string()))
}

/// Find a food by key or display name, case-insensitively.
///
/// Falls back to plural/singular variations of the name so that
/// "shrimps" still resolves.
pub fn find_food(name: &str) -> Option<&'static Food> {
    let normalized = name.to_lowercase();
    let normalized = normalized.trim();

    if let Some(food) = CATALOG.ingredients.get(normalized) {
        return Some(food);
    }

    let by_name = |needle: &str| {
        CATALOG
            .ingredients
            .values()
            .find(|f| f.name.to_lowercase() == needle)
    };

    if let Some(food) = by_name(normalized) {
        return Some(food);
    }

    // Plural/singular variations: "shrimps" -> "shrimp", "egg" -> "eggs"
    if let Some(without_s) = normalized.strip_suffix('s') {
        if let Some(food) = by_name(without_s) {
            return Some(food);
        }
    }
    let with_s = format!("{normalized}s");
    by_name(&with_s)
}

/// All foods in a swap group, in catalog order.
pub fn swap_group(group: &str) -> Result<Vec<(&'static str, &'static Food)>, CatalogError> {
    let keys = CATALOG
        .swap_groups
        .get(group)
        .ok_or_else(|| CatalogError::UnknownGroup(group.to_string()))?;

    Ok(keys
        .iter()
        .filter_map(|k| CATALOG.ingredients.get(k).map(|f| (k.as_str(), f)))
        .collect())
}

/// Names of all swap groups, sorted.
pub fn swap_groups() -> Vec<&'static str> {
    let mut groups: Vec<&'static str> = CATALOG.swap_groups.keys().map(|k| k.as_str()).collect();
    groups.sort_unstable();
    groups
}

/// All catalog entries, sorted by key for deterministic output.
pub fn all_foods() -> Vec<(&'static str, &'static Food)> {
    let mut foods: Vec<(&'static str, &'static Food)> = CATALOG
        .ingredients
        .iter()
        .map(|(k, f)| (k.as_str(), f))
        .collect();
    foods.sort_unstable_by_key(|(k, _)| *k);
    foods
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_food_direct() {
        let food = get_food("chicken_breast_cooked").unwrap();
        assert_eq!(food.per100.protein, 31.0);
    }

    #[test]
    fn test_get_food_unknown() {
        assert!(matches!(
            get_food("unicorn_tears"),
            Err(CatalogError::UnknownFood(_))
        ));
    }

    #[test]
    fn test_find_food_by_key() {
        assert!(find_food("salmon_cooked").is_some());
    }

    #[test]
    fn test_find_food_by_name_case_insensitive() {
        assert!(find_food("chicken breast, cooked").is_some());
        assert!(find_food("CHICKEN BREAST, COOKED").is_some());
    }

    #[test]
    fn test_find_food_unknown() {
        assert!(find_food("unicorn tears").is_none());
    }

    #[test]
    fn test_macros_for() {
        let food = get_food("chicken_breast_cooked").unwrap();
        let (kcal, protein) = food.macros_for(150.0);
        assert!((kcal - 247.5).abs() < 1e-9);
        assert!((protein - 46.5).abs() < 1e-9);
    }

    #[test]
    fn test_swap_group() {
        let proteins = swap_group("lean_proteins").unwrap();
        assert!(proteins.iter().any(|(k, _)| *k == "salmon_cooked"));
    }

    #[test]
    fn test_swap_group_unknown() {
        assert!(matches!(
            swap_group("mystery_group"),
            Err(CatalogError::UnknownGroup(_))
        ));
    }

    #[test]
    fn test_all_foods_sorted() {
        let foods = all_foods();
        assert!(!foods.is_empty());
        let keys: Vec<_> = foods.iter().map(|(k, _)| *k).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_every_group_member_exists() {
        for group in swap_groups() {
            let members = swap_group(group).unwrap();
            assert!(!members.is_empty(), "group {group} should not be empty");
        }
    }
}
