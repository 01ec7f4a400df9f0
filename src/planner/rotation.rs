use rand::Rng;
use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::{MealPlanSlot, Recipe};

/// Draw `count` recipes uniformly without replacement, refilling from the
/// full pool each time it runs dry.
///
/// Every recipe is used once per round before any recipe repeats. The pool
/// itself is never touched; draws come from a working copy.
pub fn draw_rotating<'a, R: Rng + ?Sized>(
    pool: &[&'a Recipe],
    count: usize,
    rng: &mut R,
) -> Result<Vec<&'a Recipe>> {
    if pool.is_empty() {
        return Err(PlanError::EmptyPool);
    }

    let mut remaining: Vec<&Recipe> = Vec::with_capacity(pool.len());
    let mut drawn = Vec::with_capacity(count);
    let mut round = 0;

    while drawn.len() < count {
        if remaining.is_empty() {
            round += 1;
            debug!(round, pool = pool.len(), "starting recipe rotation round");
            remaining.extend_from_slice(pool);
        }

        let index = rng.gen_range(0..remaining.len());
        drawn.push(remaining.swap_remove(index));
    }

    Ok(drawn)
}

/// Quantity-driven selection: `days * servings_per_day` meals, grouped into
/// days by position. Slots carry no slot type.
pub fn select_from_allow_list<R: Rng + ?Sized>(
    pool: &[&Recipe],
    days: u32,
    servings_per_day: u32,
    rng: &mut R,
) -> Result<Vec<MealPlanSlot>> {
    let per_day = servings_per_day.max(1) as usize;
    let needed = days as usize * per_day;

    let drawn = draw_rotating(pool, needed, rng)?;

    Ok(drawn
        .into_iter()
        .enumerate()
        .map(|(index, recipe)| MealPlanSlot::new(recipe.clone(), None, (index / per_day) as u32))
        .collect())
}
