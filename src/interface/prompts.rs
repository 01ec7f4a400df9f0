use std::collections::{BTreeSet, HashSet};

use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{Constraints, PrepTimeLimit, Recipe, SelectionStrategy};
use crate::planner::constants::{FUZZY_MATCH_LIMIT, FUZZY_MATCH_THRESHOLD, PREP_TIME_CHOICES};

/// Prompt for a positive whole number.
fn prompt_count(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    match input.trim().parse::<u32>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(PlanError::InvalidConstraints(format!(
            "'{}' is not a whole number of at least 1",
            input.trim()
        ))),
    }
}

/// Prompt for the number of days to plan.
pub fn prompt_days(default: u32) -> Result<u32> {
    prompt_count("How many days should the plan cover?", default)
}

/// Prompt for the number of meals per day.
pub fn prompt_servings_per_day(default: u32) -> Result<u32> {
    prompt_count("How many meals per day?", default)
}

/// Prompt for the prep time ceiling.
pub fn prompt_prep_time(default: PrepTimeLimit) -> Result<PrepTimeLimit> {
    let labels: Vec<String> = PREP_TIME_CHOICES
        .iter()
        .map(|choice| match *choice {
            "any" => "Any prep time".to_string(),
            minutes => format!("Up to {minutes} minutes"),
        })
        .collect();

    let default_index = PREP_TIME_CHOICES
        .iter()
        .position(|choice| *choice == default.to_string())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Maximum preparation time")
        .items(&labels)
        .default(default_index)
        .interact()?;

    PREP_TIME_CHOICES[selection].parse()
}

/// Every distinct ingredient name in the catalog, sorted.
pub fn known_ingredients(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .filter_map(|r| r.ingredient_list())
        .flatten()
        .map(|i| i.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Prompt for excluded products with fuzzy matching against known
/// ingredient names. Unknown products are kept as typed, since exclusion is
/// substring based.
pub fn prompt_excluded_products(known: &[String], current: &[String]) -> Result<Vec<String>> {
    let mut excluded: Vec<String> = current.to_vec();

    if !excluded.is_empty() {
        println!("Currently excluded: {}", excluded.join(", "));
        let keep = prompt_yes_no("Keep these exclusions?", true)?;
        if !keep {
            excluded.clear();
        }
    }

    loop {
        let input: String = Input::new()
            .with_prompt("Exclude a product (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let lowered = input.to_lowercase();

        // Exact or substring hits are excluded as typed
        if known.iter().any(|k| k.to_lowercase().contains(&lowered)) {
            excluded.push(input.to_string());
            println!("Excluded: {input}");
            continue;
        }

        let mut candidates: Vec<(&String, f64)> = known
            .iter()
            .map(|k| (k, jaro_winkler(&k.to_lowercase(), &lowered)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No ingredient matches '{input}', excluding it as typed.");
            excluded.push(input.to_string());
            continue;
        }

        let options: Vec<String> = candidates
            .iter()
            .take(FUZZY_MATCH_LIMIT)
            .map(|(name, _)| (*name).clone())
            .collect();

        let mut selection_options = options.clone();
        selection_options.push(format!("Keep '{input}' as typed"));

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&selection_options)
            .default(0)
            .interact()?;

        let chosen = options
            .get(selection)
            .cloned()
            .unwrap_or_else(|| input.to_string());
        println!("Excluded: {chosen}");
        excluded.push(chosen);
    }

    let mut seen = HashSet::new();
    excluded.retain(|product| seen.insert(product.to_lowercase()));
    Ok(excluded)
}

/// Let the user tick recipes for an allow-list plan.
pub fn prompt_recipe_selection(recipes: &[Recipe], current: &[String]) -> Result<Vec<String>> {
    let labels: Vec<String> = recipes
        .iter()
        .map(|r| match r.display_slot() {
            Some(slot) => format!("{} ({slot}, {} min)", r.name, r.prep_time),
            None => format!("{} ({} min)", r.name, r.prep_time),
        })
        .collect();
    let defaults: Vec<bool> = recipes.iter().map(|r| current.contains(&r.id)).collect();

    let chosen = MultiSelect::new()
        .with_prompt("Pick recipes (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    Ok(chosen.into_iter().map(|i| recipes[i].id.clone()).collect())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect all plan constraints, starting from `defaults`.
pub fn collect_plan_constraints(recipes: &[Recipe], defaults: &Constraints) -> Result<Constraints> {
    let days = prompt_days(defaults.days)?;
    let servings_per_day = prompt_servings_per_day(defaults.servings_per_day)?;

    let modes = ["Exclude products", "Pick recipes"];
    let default_mode = match defaults.selection {
        SelectionStrategy::CategoryFilter { .. } => 0,
        SelectionStrategy::ExplicitAllowList { .. } => 1,
    };
    let mode = Select::new()
        .with_prompt("How should recipes be chosen?")
        .items(&modes)
        .default(default_mode)
        .interact()?;

    let (prep_time, selection) = if mode == 0 {
        let (current, snack) = match &defaults.selection {
            SelectionStrategy::CategoryFilter {
                excluded_products,
                include_snack,
            } => (excluded_products.as_slice(), *include_snack),
            SelectionStrategy::ExplicitAllowList { .. } => (&[][..], false),
        };

        let prep_time = prompt_prep_time(defaults.prep_time)?;
        let excluded_products = prompt_excluded_products(&known_ingredients(recipes), current)?;
        let include_snack = prompt_yes_no("Add a snack each day?", snack)?;

        (
            prep_time,
            SelectionStrategy::CategoryFilter {
                excluded_products,
                include_snack,
            },
        )
    } else {
        let current = defaults.selection.requested_ids().unwrap_or_default();
        let ids = prompt_recipe_selection(recipes, current)?;
        let recipe_ids = if ids.is_empty() { None } else { Some(ids) };

        (PrepTimeLimit::Any, SelectionStrategy::ExplicitAllowList { recipe_ids })
    };

    let constraints = Constraints {
        days,
        servings_per_day,
        prep_time,
        selection,
    };
    constraints.validate()?;
    Ok(constraints)
}
