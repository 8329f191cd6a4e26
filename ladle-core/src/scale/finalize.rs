//! Finalization stage.
//!
//! Recomputes meal totals and, when post-rounding calories drift past a
//! small tolerance, nudges a single ingredient's mass to close the gap.

use tracing::debug;

use super::{refresh_cup_measure, Positioned, MIN_DIVISOR};
use crate::classify::is_carb_fat;
use crate::rounding::{round_quantity, QuantityUnit};
use crate::types::{Ingredient, Recipe, RecipeSummary, Totals};

/// Calorie drift an eater will not notice; within it no nudge happens.
const CALORIE_TOLERANCE_KCAL: f64 = 5.0;

/// Finalized meal before the entry point attaches the serving duplicate.
#[derive(Debug, Clone)]
pub struct FinalizedMeal {
    pub recipe: RecipeSummary,
    pub ingredients: Vec<Ingredient>,
    pub totals: Totals,
}

/// Compute meal totals: calories to the nearest kcal, protein to the
/// nearest half gram.
pub fn compute_totals(ingredients: &[Ingredient]) -> Totals {
    let kcal: f64 = ingredients.iter().map(|i| i.calories).sum();
    let protein: f64 = ingredients.iter().map(|i| i.protein_g).sum();
    Totals {
        calories_kcal: kcal.round() as i64,
        protein_g: (protein * 2.0).round() / 2.0,
    }
}

/// Recompute totals and close residual calorie error with one corrective
/// nudge when the drift exceeds the tolerance.
pub fn finalize_meal(
    ingredients: &[Positioned],
    recipe: &Recipe,
    calorie_target_kcal: f64,
) -> FinalizedMeal {
    let mut items: Vec<Ingredient> = ingredients.iter().map(|p| p.item.clone()).collect();
    let mut totals = compute_totals(&items);

    if calorie_target_kcal.is_finite() {
        let diff_kcal = (calorie_target_kcal - totals.calories_kcal as f64).round();
        if diff_kcal.abs() > CALORIE_TOLERANCE_KCAL && nudge_one_ingredient(&mut items, diff_kcal) {
            totals = compute_totals(&items);
        }
    }

    FinalizedMeal {
        recipe: RecipeSummary::from_recipe(recipe),
        ingredients: items,
        totals,
    }
}

/// Adjust one ingredient's mass to absorb `diff_kcal` calories.
///
/// Prefers the first carb/fat ingredient with positive calories and nonzero
/// mass, then any ingredient with nonzero mass and positive calories.
/// Returns false when nothing qualifies or the chosen ingredient has no
/// usable calorie density.
fn nudge_one_ingredient(items: &mut [Ingredient], diff_kcal: f64) -> bool {
    let chosen = items
        .iter()
        .position(|i| is_carb_fat(i) && i.calories > 0.0 && i.grams_or_zero() != 0.0)
        .or_else(|| {
            items
                .iter()
                .position(|i| i.grams_or_zero() != 0.0 && i.calories > 0.0)
        });

    let Some(idx) = chosen else {
        debug!(diff_kcal, "no ingredient can absorb the calorie correction");
        return false;
    };

    let item = &mut items[idx];
    let old_g = item.grams_or_zero();
    let kcal_per_gram = item.calories / old_g.max(MIN_DIVISOR);
    if kcal_per_gram <= 0.0 {
        return false;
    }

    let delta_g = diff_kcal / kcal_per_gram;
    let new_g = round_quantity(item.label(), QuantityUnit::Grams, old_g + delta_g);
    let corrected = new_g / old_g.max(MIN_DIVISOR);
    item.grams = Some(new_g);
    item.calories *= corrected;
    item.protein_g *= corrected;
    refresh_cup_measure(item);

    debug!(
        ingredient = item.label(),
        diff_kcal,
        delta_g = new_g - old_g,
        "nudged one ingredient to close the calorie gap"
    );
    true
}
