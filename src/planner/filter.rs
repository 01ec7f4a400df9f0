use std::collections::HashSet;

use tracing::{debug, warn};

use crate::models::{PrepTimeLimit, Recipe, SlotType};

/// Lower-cased, trimmed exclusion needles. Blank entries are dropped so they
/// cannot match every ingredient.
pub fn normalize_exclusions(excluded_products: &[String]) -> Vec<String> {
    excluded_products
        .iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Whether the recipe mentions any of the (already normalized) needles.
///
/// With exclusions active, a recipe whose ingredient list is malformed
/// counts as excluded: its ingredients cannot be checked.
pub fn contains_excluded(recipe: &Recipe, needles: &[String]) -> bool {
    if needles.is_empty() {
        return false;
    }
    if recipe.ingredient_list().is_none() {
        warn!(recipe = %recipe.name, id = %recipe.id, "malformed ingredients, excluding recipe");
        return true;
    }
    needles.iter().any(|needle| recipe.mentions_ingredient(needle))
}

/// Recipes whose prep time fits under the ceiling.
pub fn filter_by_prep_time(recipes: &[Recipe], limit: PrepTimeLimit) -> Vec<&Recipe> {
    recipes.iter().filter(|r| limit.allows(r.prep_time)).collect()
}

/// Recipes with no ingredient matching an excluded product
/// (case-insensitive substring).
pub fn filter_by_exclusions<'a>(recipes: &'a [Recipe], excluded_products: &[String]) -> Vec<&'a Recipe> {
    let needles = normalize_exclusions(excluded_products);
    recipes
        .iter()
        .filter(|r| !contains_excluded(r, &needles))
        .collect()
}

/// Recipes that serve at least `servings` people.
pub fn filter_by_servings(recipes: &[Recipe], servings: u32) -> Vec<&Recipe> {
    recipes.iter().filter(|r| r.servings >= servings).collect()
}

/// Recipes carrying at least one of `tags`.
pub fn filter_by_tags<'a>(recipes: &'a [Recipe], tags: &[String]) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|r| tags.iter().any(|tag| r.tags.contains(tag)))
        .collect()
}

/// Recipes flagged for a meal slot.
pub fn filter_by_slot(recipes: &[Recipe], slot: SlotType) -> Vec<&Recipe> {
    recipes.iter().filter(|r| r.fits_slot(slot)).collect()
}

/// Recipes whose id is in `ids`, in catalog order.
pub fn restrict_to_ids<'a>(recipes: &'a [Recipe], ids: &[String]) -> Vec<&'a Recipe> {
    let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
    let selected: Vec<&Recipe> = recipes
        .iter()
        .filter(|r| wanted.contains(r.id.as_str()))
        .collect();

    if selected.len() < wanted.len() {
        let found: HashSet<&str> = selected.iter().map(|r| r.id.as_str()).collect();
        let missing: Vec<&str> = wanted.difference(&found).copied().collect();
        warn!(?missing, "selected recipes not found in catalog");
    }

    selected
}

/// Category-mode pool: prep time ceiling plus ingredient exclusions.
///
/// When nothing passes, the whole pool is returned instead.
pub fn eligible_pool<'a>(
    recipes: &'a [Recipe],
    limit: PrepTimeLimit,
    excluded_products: &[String],
) -> Vec<&'a Recipe> {
    let needles = normalize_exclusions(excluded_products);
    let eligible: Vec<&Recipe> = recipes
        .iter()
        .filter(|r| limit.allows(r.prep_time))
        .filter(|r| !contains_excluded(r, &needles))
        .collect();

    debug!(
        total = recipes.len(),
        eligible = eligible.len(),
        prep_time = %limit,
        exclusions = needles.len(),
        "filtered recipe pool"
    );

    if eligible.is_empty() && !recipes.is_empty() {
        warn!("no recipes match the requested filters, using all recipes");
        return recipes.iter().collect();
    }

    eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    fn recipe(id: &str, prep_time: u32, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: format!("Recipe {id}"),
            description: None,
            instructions: vec!["Cook".to_string()],
            ingredients: Some(
                ingredients
                    .iter()
                    .map(|name| Ingredient::new(*name, 100.0, "g"))
                    .collect(),
            ),
            prep_time,
            cook_time: 10,
            servings: 2,
            is_breakfast: true,
            is_lunch: true,
            is_dinner: true,
            is_snack: false,
            tags: vec!["лесно".to_string()],
        }
    }

    fn sample_recipes() -> Vec<Recipe> {
        vec![
            recipe("a", 10, &["Чесън", "Домати"]),
            recipe("b", 30, &["Ориз"]),
            recipe("c", 15, &["Сирене", "Яйца"]),
        ]
    }

    #[test]
    fn test_filter_by_prep_time() {
        let recipes = sample_recipes();
        let ids: Vec<&str> = filter_by_prep_time(&recipes, PrepTimeLimit::Minutes(15))
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(filter_by_prep_time(&recipes, PrepTimeLimit::Any).len(), 3);
    }

    #[test]
    fn test_exclusion_is_case_insensitive_substring() {
        let recipes = sample_recipes();
        let kept = filter_by_exclusions(&recipes, &["чесън".to_string()]);
        assert!(kept.iter().all(|r| r.id != "a"));
        assert_eq!(kept.len(), 2);

        let kept = filter_by_exclusions(&recipes, &["СИР".to_string()]);
        assert!(kept.iter().all(|r| r.id != "c"));
    }

    #[test]
    fn test_malformed_ingredients_excluded_only_when_filtering() {
        let mut recipes = sample_recipes();
        let broken: Recipe = serde_json::from_str(
            r#"{"id": "d", "name": "Broken", "ingredients": {"name": "Чесън", "amount": 1, "unit": "скилидка"}}"#,
        )
        .unwrap();
        assert!(broken.ingredient_list().is_none());
        recipes.push(broken);

        let kept = filter_by_exclusions(&recipes, &["чесън".to_string()]);
        let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);

        assert_eq!(filter_by_exclusions(&recipes, &[]).len(), 4);
    }

    #[test]
    fn test_blank_exclusions_ignored() {
        let recipes = sample_recipes();
        let kept = filter_by_exclusions(&recipes, &["  ".to_string(), String::new()]);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_eligible_pool_combines_filters() {
        let recipes = sample_recipes();
        let pool = eligible_pool(&recipes, PrepTimeLimit::Minutes(15), &["Чесън".to_string()]);
        let ids: Vec<&str> = pool.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
    }

    #[test]
    fn test_eligible_pool_falls_back_to_all() {
        let recipes = sample_recipes();
        let pool = eligible_pool(&recipes, PrepTimeLimit::Minutes(1), &[]);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_restrict_to_ids_keeps_catalog_order() {
        let recipes = sample_recipes();
        let ids = vec!["c".to_string(), "a".to_string(), "zzz".to_string()];
        let pool: Vec<&str> = restrict_to_ids(&recipes, &ids)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(pool, vec!["a", "c"]);
    }

    #[test]
    fn test_filter_by_servings_and_tags() {
        let mut recipes = sample_recipes();
        recipes[1].servings = 6;
        recipes[2].tags = vec!["празнично".to_string()];

        assert_eq!(filter_by_servings(&recipes, 4).len(), 1);
        assert_eq!(filter_by_tags(&recipes, &["празнично".to_string()]).len(), 1);
        assert_eq!(filter_by_tags(&recipes, &[]).len(), 0);
    }

    #[test]
    fn test_filter_by_slot() {
        let mut recipes = sample_recipes();
        recipes[0].is_snack = true;
        assert_eq!(filter_by_slot(&recipes, SlotType::Snack).len(), 1);
        assert_eq!(filter_by_slot(&recipes, SlotType::Dinner).len(), 3);
    }
}
