//! `ladle catalog` subcommand.

use anyhow::Result;
use food_catalog::Food;

pub fn run(group: Option<&str>) -> Result<()> {
    match group {
        Some(group) => {
            for (key, food) in food_catalog::swap_group(group)? {
                print_food(key, food);
            }
        }
        None => {
            for (key, food) in food_catalog::all_foods() {
                print_food(key, food);
            }
        }
    }
    Ok(())
}

fn print_food(key: &str, food: &Food) {
    println!(
        "{:<36} {:<32} {:>6.0} kcal {:>6.1}g protein /100g",
        key, food.name, food.per100.kcal, food.per100.protein
    );
}
