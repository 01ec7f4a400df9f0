use rand::Rng;
use tracing::info;

use crate::catalog::RecipeCatalog;
use crate::error::Result;
use crate::models::{Constraints, MealPlan, MealPlanSlot, Recipe, SelectionStrategy};
use crate::planner::filter::{eligible_pool, restrict_to_ids};
use crate::planner::rotation::select_from_allow_list;
use crate::planner::selection::select_by_category;

impl SelectionStrategy {
    /// Fill the plan's slots from `pool` according to this strategy.
    pub fn select<R: Rng + ?Sized>(
        &self,
        pool: &[Recipe],
        constraints: &Constraints,
        rng: &mut R,
    ) -> Result<Vec<MealPlanSlot>> {
        match self {
            SelectionStrategy::CategoryFilter {
                excluded_products,
                include_snack,
            } => {
                let eligible = eligible_pool(pool, constraints.prep_time, excluded_products);
                select_by_category(
                    &eligible,
                    constraints.days,
                    constraints.servings_per_day,
                    *include_snack,
                    rng,
                )
            }
            SelectionStrategy::ExplicitAllowList { recipe_ids } => {
                let selected: Vec<&Recipe> = match recipe_ids {
                    Some(ids) => restrict_to_ids(pool, ids),
                    None => pool.iter().collect(),
                };
                select_from_allow_list(
                    &selected,
                    constraints.days,
                    constraints.servings_per_day,
                    rng,
                )
            }
        }
    }
}

/// Generate a meal plan from a recipe pool snapshot.
pub fn generate_meal_plan<R: Rng + ?Sized>(
    pool: &[Recipe],
    constraints: &Constraints,
    rng: &mut R,
) -> Result<MealPlan> {
    constraints.validate()?;

    info!(
        days = constraints.days,
        servings_per_day = constraints.servings_per_day,
        prep_time = %constraints.prep_time,
        recipes = pool.len(),
        "generating meal plan"
    );

    let meals = constraints.selection.select(pool, constraints, rng)?;

    info!(meals = meals.len(), "meal plan generated");

    Ok(MealPlan {
        days: constraints.days,
        servings_per_day: constraints.servings_per_day,
        prep_time: constraints.prep_time,
        meals,
    })
}

/// Fetch the pool from a catalog, then generate.
///
/// Catalog failures propagate unchanged; they are never turned into an
/// empty pool.
pub fn generate_from_catalog<C, R>(
    catalog: &C,
    constraints: &Constraints,
    rng: &mut R,
) -> Result<MealPlan>
where
    C: RecipeCatalog + ?Sized,
    R: Rng + ?Sized,
{
    constraints.validate()?;
    let pool = catalog.fetch(constraints.selection.requested_ids())?;
    generate_meal_plan(&pool, constraints, rng)
}
