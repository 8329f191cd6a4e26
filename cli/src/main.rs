mod catalog_cmd;
mod recipe_file;
mod scale_cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ladle")]
#[command(about = "Scale meal recipes to protein and calorie targets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scale a recipe file to per-meal macro targets
    Scale {
        /// Path to the recipe JSON file
        recipe: PathBuf,
        /// Protein target for the meal, grams
        #[arg(long)]
        protein: f64,
        /// Calorie target for the meal, kcal
        #[arg(long)]
        calories: f64,
        /// Emit the scaled meal as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List catalog foods, optionally filtered by swap group
    Catalog {
        /// Swap group to list (e.g. lean_proteins); omit for all foods
        #[arg(long)]
        group: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scale {
            recipe,
            protein,
            calories,
            json,
        } => scale_cmd::run(&recipe, protein, calories, json),
        Commands::Catalog { group } => catalog_cmd::run(group.as_deref()),
    }
}
