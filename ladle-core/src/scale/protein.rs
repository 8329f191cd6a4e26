//! Protein scaling stage.
//!
//! Proportionally scales protein-bearing ingredients so their combined
//! protein mass matches the per-meal target. Non-protein ingredients pass
//! through untouched.

use tracing::debug;

use super::{apply_mass_factor, restore_order, Positioned, MIN_DIVISOR};
use crate::classify::is_protein_bearing;

/// Scale protein-bearing ingredients to hit `target_g` grams of protein.
///
/// Returns a new list in the original input order. The stage is a no-op
/// (deep copy) when the target is not finite or no ingredient matches the
/// protein patterns.
pub fn scale_to_protein_target(ingredients: &[Positioned], target_g: f64) -> Vec<Positioned> {
    let copied: Vec<Positioned> = ingredients.to_vec();

    if !target_g.is_finite() {
        debug!("protein target is not finite, passing ingredients through");
        return copied;
    }

    let (mut proteins, rest): (Vec<Positioned>, Vec<Positioned>) =
        copied.into_iter().partition(|p| is_protein_bearing(&p.item));

    if proteins.is_empty() {
        debug!("no protein-bearing ingredients, passing through");
        return restore_order(rest);
    }

    let current_g: f64 = proteins.iter().map(|p| p.item.protein_g).sum();
    let factor = target_g / current_g.max(MIN_DIVISOR);
    debug!(
        current_protein_g = current_g,
        target_g, factor, "scaling protein partition"
    );

    for p in &mut proteins {
        apply_mass_factor(&mut p.item, factor);
    }

    proteins.extend(rest);
    restore_order(proteins)
}
