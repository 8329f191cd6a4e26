//! Food catalog for meal-prep planning.
//!
//! This crate provides an embedded catalog of common meal-prep foods with
//! per-100 g calories and protein, grams-per-cup density where volume
//! measurement makes sense, category tags, and swap groups for ingredient
//! substitution.
//!
//! # Example
//!
//! ```
//! use food_catalog::get_food;
//!
//! let chicken = get_food("chicken_breast_cooked").unwrap();
//! let (kcal, protein) = chicken.macros_for(150.0);
//! println!("150g chicken = {kcal} kcal, {protein}g protein");
//! ```

mod catalog;

pub use catalog::{all_foods, find_food, get_food, swap_group, swap_groups, CatalogError, Food, Per100};
