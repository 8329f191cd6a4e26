//! Calorie scaling stage.
//!
//! Scales every non-fixed ingredient so total calories land on the calorie
//! budget left after fixed (non-scaling) ingredients are accounted for.
//! Protein ingredients scaled by the previous stage are eligible here too,
//! unless they match the non-scaling patterns.

use tracing::debug;

use super::{apply_mass_factor, refresh_cup_measure, restore_order, Positioned};
use crate::classify::is_non_scaling;

/// Scale the non-fixed ingredients toward `target_kcal` total calories.
///
/// Returns a new list in the original input order. The stage is a no-op
/// (deep copy) when the target is not finite, the scalable group has no
/// positive calories, or the fixed ingredients already meet the budget.
pub fn scale_to_calorie_target(ingredients: &[Positioned], target_kcal: f64) -> Vec<Positioned> {
    let copied: Vec<Positioned> = ingredients.to_vec();

    if !target_kcal.is_finite() {
        debug!("calorie target is not finite, passing ingredients through");
        return copied;
    }

    let (fixed, mut scalable): (Vec<Positioned>, Vec<Positioned>) =
        copied.into_iter().partition(|p| is_non_scaling(&p.item));

    let scalable_kcal: f64 = scalable.iter().map(|p| p.item.calories).sum();
    let fixed_kcal: f64 = fixed.iter().map(|p| p.item.calories).sum();
    let residual_kcal = (target_kcal - fixed_kcal).max(0.0);

    if scalable_kcal <= 0.0 || residual_kcal <= 0.0 {
        debug!(
            scalable_kcal,
            residual_kcal, "nothing to scale toward the calorie budget, passing through"
        );
        let mut merged = fixed;
        merged.extend(scalable);
        return restore_order(merged);
    }

    let factor = residual_kcal / scalable_kcal;
    debug!(scalable_kcal, fixed_kcal, residual_kcal, factor, "scaling toward calorie budget");

    for p in &mut scalable {
        apply_mass_factor(&mut p.item, factor);
        refresh_cup_measure(&mut p.item);
    }

    let mut merged = fixed;
    merged.extend(scalable);
    restore_order(merged)
}
