use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use hranoplan::catalog::{InMemoryCatalog, JsonFileCatalog, RecipeCatalog};
use hranoplan::cli::{Cli, Command, PlanArgs};
use hranoplan::error::Result;
use hranoplan::interface::{
    collect_plan_constraints, display_meal_plan, display_recipe_list, display_shopping_list,
};
use hranoplan::logging;
use hranoplan::models::{Constraints, PrepTimeLimit, Recipe, SelectionStrategy, SlotType};
use hranoplan::planner::{
    filter_by_prep_time, filter_by_servings, filter_by_slot, filter_by_tags, generate_from_catalog,
};
use hranoplan::shopping::{generate_shopping_list, write_plan_json, write_shopping_list_csv};
use hranoplan::state::{load_settings, save_settings};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&cli.catalog, &cli.settings, &args),
        Command::Recipes {
            slot,
            max_prep,
            min_servings,
            tags,
        } => cmd_recipes(&cli.catalog, slot, max_prep, min_servings, &tags),
        Command::Validate => {
            if !cmd_validate(&cli.catalog)? {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

/// Merge command-line flags over the saved constraints.
fn constraints_from_args(args: &PlanArgs, saved: &Constraints) -> Constraints {
    let selection = if !args.recipes.is_empty() {
        SelectionStrategy::ExplicitAllowList {
            recipe_ids: Some(args.recipes.clone()),
        }
    } else if !args.exclude.is_empty() || args.snack {
        SelectionStrategy::CategoryFilter {
            excluded_products: args.exclude.clone(),
            include_snack: args.snack,
        }
    } else {
        saved.selection.clone()
    };

    Constraints {
        days: args.days.unwrap_or(saved.days),
        servings_per_day: args.servings.unwrap_or(saved.servings_per_day),
        prep_time: args.prep_time.unwrap_or(saved.prep_time),
        selection,
    }
}

/// Generate a meal plan and its shopping list.
fn cmd_plan(catalog_path: &Path, settings_path: &Path, args: &PlanArgs) -> Result<()> {
    let recipes = JsonFileCatalog::new(catalog_path).fetch(None)?;
    println!("Loaded {} recipes", recipes.len());

    let saved = load_settings(settings_path)?.unwrap_or_default();
    let mut constraints = constraints_from_args(args, &saved);

    if args.interactive {
        println!();
        constraints = collect_plan_constraints(&recipes, &constraints)?;
    }

    if matches!(
        constraints.selection,
        SelectionStrategy::ExplicitAllowList { .. }
    ) && constraints.prep_time != PrepTimeLimit::Any
    {
        warn!(prep_time = %constraints.prep_time, "prep time is ignored for picked recipes");
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let catalog = InMemoryCatalog::new(recipes);
    let plan = generate_from_catalog(&catalog, &constraints, &mut rng)?;
    let shopping_list = generate_shopping_list(plan.recipes());

    display_meal_plan(&plan);
    display_shopping_list(&shopping_list);

    if let Some(path) = &args.json {
        write_plan_json(&plan, &shopping_list, path)?;
        println!("Plan written to {}", path.display());
    }

    if let Some(path) = &args.csv {
        write_shopping_list_csv(&shopping_list, path)?;
        println!("Shopping list written to {}", path.display());
    }

    save_settings(settings_path, &constraints)?;
    info!(path = %settings_path.display(), "settings saved");

    Ok(())
}

/// List catalog recipes, narrowed by the given filters.
fn cmd_recipes(
    catalog_path: &Path,
    slot: Option<SlotType>,
    max_prep: Option<u32>,
    min_servings: Option<u32>,
    tags: &[String],
) -> Result<()> {
    let mut recipes = JsonFileCatalog::new(catalog_path).fetch(None)?;

    if let Some(slot) = slot {
        recipes = owned(filter_by_slot(&recipes, slot));
    }
    if let Some(max) = max_prep {
        recipes = owned(filter_by_prep_time(&recipes, PrepTimeLimit::Minutes(max)));
    }
    if let Some(min) = min_servings {
        recipes = owned(filter_by_servings(&recipes, min));
    }
    if !tags.is_empty() {
        recipes = owned(filter_by_tags(&recipes, tags));
    }

    let refs: Vec<&Recipe> = recipes.iter().collect();
    display_recipe_list(&refs, "Recipes");

    Ok(())
}

fn owned(recipes: Vec<&Recipe>) -> Vec<Recipe> {
    recipes.into_iter().cloned().collect()
}

/// Report recipes with missing or malformed fields. Returns false when any fail.
fn cmd_validate(catalog_path: &Path) -> Result<bool> {
    let recipes = JsonFileCatalog::new(catalog_path).fetch(None)?;

    let mut failed = 0;
    for recipe in &recipes {
        let problems = recipe.validate();
        if problems.is_empty() {
            continue;
        }

        failed += 1;
        println!("[{}] {}", recipe.id, recipe.name);
        for problem in problems {
            println!("  - {}", problem);
        }
    }

    if failed == 0 {
        println!("All {} recipes are valid.", recipes.len());
    } else {
        println!();
        println!("{} of {} recipes have problems.", failed, recipes.len());
    }

    Ok(failed == 0)
}
