//! `ladle scale` subcommand.

use std::path::Path;

use anyhow::Result;
use ladle_core::{scale_meal, ScaledMeal};

use crate::recipe_file;

pub fn run(path: &Path, protein_g: f64, calories_kcal: f64, json: bool) -> Result<()> {
    let recipe = recipe_file::load_recipe(path)?;
    let meal = scale_meal(&recipe, None, protein_g, calories_kcal);

    if json {
        println!("{}", serde_json::to_string_pretty(&meal)?);
    } else {
        print_table(&meal);
    }

    Ok(())
}

fn print_table(meal: &ScaledMeal) {
    if let Some(name) = &meal.recipe.name {
        println!("{name}");
        println!();
    }

    println!("{:<32} {:>8} {:>8} {:>8} {:>10}", "Ingredient", "Grams", "Cups", "Kcal", "Protein g");
    for ingredient in &meal.ingredients {
        let cups = ingredient
            .cups
            .map(|c| format!("{c:.2}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<32} {:>8.0} {:>8} {:>8.0} {:>10.1}",
            ingredient.label(),
            ingredient.grams_or_zero(),
            cups,
            ingredient.calories,
            ingredient.protein_g,
        );
    }

    println!();
    println!(
        "Totals: {} kcal, {:.1}g protein",
        meal.totals.calories_kcal, meal.totals.protein_g
    );
}
