//! Data model for meal scaling.

use serde::{Deserialize, Serialize};

/// One line item of a recipe.
///
/// All numeric fields tolerate absence: missing grams are treated as zero
/// and missing macros default to zero, so malformed caller data degrades to
/// a no-op instead of an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name. May be absent; [`Ingredient::label`] falls back to
    /// the `ingredient` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Alternate label field some callers use instead of `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<String>,
    /// Free-text category tags checked before the name during classification.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Amount in grams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grams: Option<f64>,
    /// Derived cup measurement for display. Output only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cups: Option<f64>,
    /// Calories for the current gram amount.
    #[serde(default)]
    pub calories: f64,
    /// Protein in grams for the current gram amount.
    #[serde(default)]
    pub protein_g: f64,
}

impl Ingredient {
    /// Label used for classification and density lookup.
    ///
    /// Absent labels yield the empty string, which matches no keyword and
    /// leaves the ingredient unclassified.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.ingredient.as_deref())
            .unwrap_or("")
    }

    /// Gram amount, defaulting absence to zero.
    pub fn grams_or_zero(&self) -> f64 {
        self.grams.unwrap_or(0.0)
    }
}

/// Recipe metadata supplied by the caller.
///
/// `ingredients` doubles as the lowest-priority ingredient source when the
/// caller passes no explicit base list (see [`crate::scale::scale_meal`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_serving: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
}

/// Base ingredient list in one of the shapes callers pass around.
///
/// Some callers hand over a plain list, others an object wrapping the list
/// in an `ingredients` field. Both deserialize here; the recipe's own
/// `ingredients` field serves as a further fallback.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IngredientSource {
    List(Vec<Ingredient>),
    Wrapped { ingredients: Vec<Ingredient> },
}

/// Recipe identity fields passed through scaling unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Defaults to the empty string when the recipe carries none.
    #[serde(default)]
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_serving: Option<f64>,
}

impl RecipeSummary {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            instructions: recipe.instructions.clone().unwrap_or_default(),
            base_serving: recipe.base_serving,
        }
    }
}

/// Aggregate macros for a scaled meal.
///
/// Calories are rounded to the nearest whole kcal, protein to the nearest
/// half gram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub calories_kcal: i64,
    pub protein_g: f64,
}

/// Result of scaling a recipe to per-meal macro targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaledMeal {
    pub recipe: RecipeSummary,
    /// Finalized ingredients, in the caller's original order.
    pub ingredients: Vec<Ingredient>,
    pub totals: Totals,
    /// Duplicate of `totals` for callers that render a per-serving card.
    pub scaled_serving: Totals,
}
