//! Macro-targeted meal scaling.
//!
//! Scales a recipe's ingredient quantities so a single meal hits a protein
//! target and a calorie target, with grocery-realistic rounding. The
//! pipeline runs three stages in order: protein scaling, calorie scaling,
//! and a finalization pass that closes residual rounding error with a
//! single corrective nudge.
//!
//! The whole crate is synchronous, purely functional per invocation, and
//! total: malformed numeric input degrades to no-ops instead of errors.
//!
//! # Example
//!
//! ```
//! use ladle_core::{scale_meal, Ingredient, Recipe};
//!
//! let recipe = Recipe {
//!     name: Some("Chicken and rice".to_string()),
//!     ingredients: Some(vec![
//!         Ingredient {
//!             name: Some("chicken breast".to_string()),
//!             grams: Some(150.0),
//!             calories: 248.0,
//!             protein_g: 46.5,
//!             ..Default::default()
//!         },
//!         Ingredient {
//!             name: Some("brown rice".to_string()),
//!             grams: Some(160.0),
//!             calories: 197.0,
//!             protein_g: 4.2,
//!             ..Default::default()
//!         },
//!     ]),
//!     ..Default::default()
//! };
//!
//! let meal = scale_meal(&recipe, None, 40.0, 600.0);
//! assert_eq!(meal.ingredients.len(), 2);
//! ```

pub mod classify;
pub mod rounding;
pub mod scale;
pub mod types;

pub use classify::{classify, grams_per_cup, IngredientClass};
pub use rounding::{round_quantity, QuantityUnit, CUP_FRACTIONS};
pub use scale::{
    compute_totals, finalize_meal, index_ingredients, scale_meal, scale_to_calorie_target,
    scale_to_protein_target, FinalizedMeal, Positioned,
};
pub use types::{Ingredient, IngredientSource, Recipe, RecipeSummary, ScaledMeal, Totals};
