//! Recipe file loading and catalog reference resolution.
//!
//! Recipe files carry recipe metadata plus ingredient entries that either
//! hold macros inline or reference the food catalog by key with a gram
//! amount. Catalog references are resolved into full ingredient records
//! before the scaling pipeline runs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ladle_core::{Ingredient, Recipe};
use serde::Deserialize;

/// On-disk recipe shape.
#[derive(Deserialize)]
pub struct RecipeFile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub base_serving: Option<f64>,
    #[serde(default)]
    pub ingredients: Vec<RecipeEntry>,
}

/// One ingredient line in a recipe file.
///
/// The catalog variant must come first: every field of an inline
/// ingredient is optional, so untagged deserialization would otherwise
/// swallow catalog references.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum RecipeEntry {
    Catalog {
        /// Food catalog key, e.g. "chicken_breast_cooked".
        catalog: String,
        grams: f64,
        /// Optional display-name override for the catalog food.
        #[serde(default)]
        name: Option<String>,
    },
    Inline(Ingredient),
}

/// Load a recipe file and resolve any catalog references.
pub fn load_recipe(path: &Path) -> Result<Recipe> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let file: RecipeFile =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;

    let ingredients = file
        .ingredients
        .into_iter()
        .map(resolve_entry)
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = ingredients.len(), "loaded recipe ingredients");

    Ok(Recipe {
        id: file.id,
        name: file.name,
        instructions: file.instructions,
        base_serving: file.base_serving,
        ingredients: Some(ingredients),
    })
}

fn resolve_entry(entry: RecipeEntry) -> Result<Ingredient> {
    match entry {
        RecipeEntry::Inline(ingredient) => Ok(ingredient),
        RecipeEntry::Catalog {
            catalog,
            grams,
            name,
        } => {
            let food = food_catalog::get_food(&catalog)
                .with_context(|| format!("resolving catalog reference \"{catalog}\""))?;
            let (calories, protein_g) = food.macros_for(grams);
            Ok(Ingredient {
                name: Some(name.unwrap_or_else(|| food.name.clone())),
                tags: food.tags.clone(),
                grams: Some(grams),
                calories,
                protein_g,
                ..Default::default()
            })
        }
    }
}
