use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{PrepTimeLimit, SlotType};

/// Hranoplan: a meal plan generator with an aggregated shopping list.
#[derive(Parser, Debug)]
#[command(name = "hranoplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe catalog JSON file.
    #[arg(short, long, default_value = "recipes.json")]
    pub catalog: PathBuf,

    /// Path to the saved plan settings.
    #[arg(short, long, default_value = "plan_settings.json")]
    pub settings: PathBuf,

    /// Log debug output to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a meal plan and its shopping list.
    Plan(PlanArgs),

    /// List recipes in the catalog.
    Recipes {
        /// Only recipes suited to this slot (breakfast, lunch, dinner, snack).
        #[arg(long)]
        slot: Option<SlotType>,

        /// Maximum preparation time in minutes.
        #[arg(long)]
        max_prep: Option<u32>,

        /// Minimum number of servings.
        #[arg(long)]
        min_servings: Option<u32>,

        /// Keep recipes carrying any of these tags.
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Check every recipe in the catalog for missing fields.
    Validate,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(clap::Args, Debug, Default, Clone)]
pub struct PlanArgs {
    /// Number of days to plan.
    #[arg(short, long)]
    pub days: Option<u32>,

    /// Meals per day.
    #[arg(long)]
    pub servings: Option<u32>,

    /// Maximum preparation time: minutes or "any".
    #[arg(long)]
    pub prep_time: Option<PrepTimeLimit>,

    /// Exclude recipes containing this product (repeatable).
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Draw only from these recipe ids (repeatable).
    #[arg(short, long = "recipe")]
    pub recipes: Vec<String>,

    /// Add a snack slot to every day.
    #[arg(long)]
    pub snack: bool,

    /// Seed for reproducible plans.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the plan and shopping list as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the shopping list as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Prompt for every constraint.
    #[arg(short, long)]
    pub interactive: bool,
}
