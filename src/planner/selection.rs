use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::{MealPlanSlot, Recipe, SlotType};
use crate::planner::constants::day_template;

/// Eligible recipes for one slot type.
struct SlotPool<'a> {
    slot: SlotType,
    candidates: Vec<&'a Recipe>,
}

/// Build per-slot candidate pools for one day's slots.
///
/// A required slot without candidates fails the whole generation; the snack
/// slot is dropped instead.
fn slot_pools<'a>(pool: &[&'a Recipe], slots: &[SlotType]) -> Result<Vec<SlotPool<'a>>> {
    let mut pools: Vec<SlotPool<'a>> = Vec::new();

    for &slot in slots {
        if pools.iter().any(|p| p.slot == slot) {
            continue;
        }

        let candidates: Vec<&Recipe> = pool.iter().copied().filter(|r| r.fits_slot(slot)).collect();
        if candidates.is_empty() {
            if slot.is_required() {
                return Err(PlanError::MissingSlotCandidates { slot });
            }
            debug!(%slot, "no candidates for optional slot, leaving it out");
            continue;
        }

        debug!(%slot, candidates = candidates.len(), "slot pool");
        pools.push(SlotPool { slot, candidates });
    }

    Ok(pools)
}

/// Pick one candidate, preferring recipes not used for the same slot on the
/// previous day. Repeats only when every candidate was used yesterday.
pub fn pick_avoiding_repeat<'a, R: Rng + ?Sized>(
    candidates: &[&'a Recipe],
    recent: &[&Recipe],
    rng: &mut R,
) -> Option<&'a Recipe> {
    let fresh: Vec<&Recipe> = candidates
        .iter()
        .copied()
        .filter(|c| !recent.iter().any(|r| r.id == c.id))
        .collect();

    if fresh.is_empty() {
        candidates.choose(rng).copied()
    } else {
        fresh.choose(rng).copied()
    }
}

/// Category-driven selection.
///
/// Every day gets `servings_per_day` required slots (breakfast, lunch,
/// dinner cycled) plus a snack when `include_snack` is set and any recipe is
/// flagged as a snack. The result is ordered by day, then slot order.
pub fn select_by_category<R: Rng + ?Sized>(
    pool: &[&Recipe],
    days: u32,
    servings_per_day: u32,
    include_snack: bool,
    rng: &mut R,
) -> Result<Vec<MealPlanSlot>> {
    if pool.is_empty() {
        return Err(PlanError::EmptyPool);
    }

    let mut slots = day_template(servings_per_day);
    if include_snack {
        slots.push(SlotType::Snack);
    }

    let pools = slot_pools(pool, &slots)?;
    let mut plan = Vec::with_capacity(days as usize * slots.len());
    let mut previous_day: Vec<(SlotType, &Recipe)> = Vec::new();

    for day in 0..days {
        let mut today: Vec<(SlotType, &Recipe)> = Vec::with_capacity(slots.len());

        for &slot in &slots {
            let Some(slot_pool) = pools.iter().find(|p| p.slot == slot) else {
                continue;
            };

            let recent: Vec<&Recipe> = previous_day
                .iter()
                .filter(|(s, _)| *s == slot)
                .map(|(_, r)| *r)
                .collect();

            let recipe = pick_avoiding_repeat(&slot_pool.candidates, &recent, rng)
                .ok_or(PlanError::MissingSlotCandidates { slot })?;

            debug!(day, %slot, recipe = %recipe.name, "filled slot");
            today.push((slot, recipe));
        }

        plan.extend(
            today
                .iter()
                .map(|(slot, recipe)| MealPlanSlot::new((*recipe).clone(), Some(*slot), day)),
        );
        previous_day = today;
    }

    Ok(plan)
}
