//! Three-stage macro scaling pipeline.
//!
//! A meal is scaled in a strict linear sequence: the protein stage brings
//! protein-bearing ingredients to the protein target, the calorie stage
//! brings the remaining scalable calories to the calorie budget, and the
//! finalization stage closes residual rounding error with a single
//! corrective nudge. Every stage takes its input by reference and returns a
//! fresh list; caller data is never mutated.

mod calories;
mod finalize;
mod protein;

pub use calories::scale_to_calorie_target;
pub use finalize::{compute_totals, finalize_meal, FinalizedMeal};
pub use protein::scale_to_protein_target;

use crate::classify::grams_per_cup;
use crate::rounding::{round_quantity, QuantityUnit};
use crate::types::{Ingredient, IngredientSource, Recipe, ScaledMeal};

/// Floor applied to divisors so zero or near-zero denominators cannot blow
/// up a scale factor.
pub(crate) const MIN_DIVISOR: f64 = 1.0;

/// An ingredient tagged with its position in the caller's list.
///
/// The index is assigned once at pipeline entry and never altered; stages
/// use it only to restore input ordering after re-partitioning.
#[derive(Debug, Clone)]
pub struct Positioned {
    pub index: usize,
    pub item: Ingredient,
}

/// Tag each ingredient with its original list position.
pub fn index_ingredients(ingredients: &[Ingredient]) -> Vec<Positioned> {
    ingredients
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, item)| Positioned { index, item })
        .collect()
}

pub(crate) fn restore_order(mut items: Vec<Positioned>) -> Vec<Positioned> {
    items.sort_by_key(|p| p.index);
    items
}

/// Scale one ingredient's mass by `factor`, rounding to a grocery-realistic
/// amount, then apply the factor implied by the *rounded* mass to calories
/// and protein so reported macros match what ends up on the scale.
pub(crate) fn apply_mass_factor(item: &mut Ingredient, factor: f64) {
    let old = item.grams_or_zero();
    let new = round_quantity(item.label(), QuantityUnit::Grams, old * factor);
    let corrected = new / old.max(MIN_DIVISOR);
    item.grams = Some(new);
    item.calories *= corrected;
    item.protein_g *= corrected;
}

/// Recompute the display cup measurement from the current gram amount.
pub(crate) fn refresh_cup_measure(item: &mut Ingredient) {
    let cups = item.grams_or_zero() / grams_per_cup(item.label());
    item.cups = Some(round_quantity(item.label(), QuantityUnit::Cups, cups));
}

/// Pick the base ingredient list from the shapes callers pass around:
/// an explicit list, an object wrapping one, the recipe's own ingredients,
/// or nothing at all.
fn resolve_base_ingredients(base: Option<&IngredientSource>, recipe: &Recipe) -> Vec<Ingredient> {
    match base {
        Some(IngredientSource::List(items)) => items.clone(),
        Some(IngredientSource::Wrapped { ingredients }) => ingredients.clone(),
        None => recipe.ingredients.clone().unwrap_or_default(),
    }
}

/// Scale a recipe so one meal hits the given protein and calorie targets.
///
/// This is the single entry point of the pipeline. It is a total function:
/// malformed numeric input degrades each stage to a no-op rather than an
/// error, and the output always carries the full ingredient list in the
/// caller's original order.
pub fn scale_meal(
    recipe: &Recipe,
    base: Option<&IngredientSource>,
    protein_target_g: f64,
    calorie_target_kcal: f64,
) -> ScaledMeal {
    let base = resolve_base_ingredients(base, recipe);
    let indexed = index_ingredients(&base);

    let after_protein = scale_to_protein_target(&indexed, protein_target_g);
    let after_calories = scale_to_calorie_target(&after_protein, calorie_target_kcal);
    let finalized = finalize_meal(&after_calories, recipe, calorie_target_kcal);

    ScaledMeal {
        recipe: finalized.recipe,
        ingredients: finalized.ingredients,
        totals: finalized.totals,
        scaled_serving: finalized.totals,
    }
}
