use crate::models::SlotType;

/// Required slots, cycled to fill `servings_per_day` slots per day.
pub const SLOT_TEMPLATE: [SlotType; 3] = [SlotType::Breakfast, SlotType::Lunch, SlotType::Dinner];

/// Default number of planned days when nothing else is known.
pub const DEFAULT_DAYS: u32 = 1;

/// Default meals per day.
pub const DEFAULT_SERVINGS_PER_DAY: u32 = 1;

/// Default prep time ceiling, in minutes.
pub const DEFAULT_PREP_MINUTES: u32 = 15;

/// Prep time choices offered by the interactive prompt.
pub const PREP_TIME_CHOICES: [&str; 5] = ["15", "30", "45", "60", "any"];

/// Minimum Jaro-Winkler score for a fuzzy product match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy suggestions shown at once.
pub const FUZZY_MATCH_LIMIT: usize = 5;

/// Required slots of one day, in plan order.
///
/// `servings_per_day` slots are taken from [`SLOT_TEMPLATE`] cycled, then
/// sorted so that repeated categories sit together.
pub fn day_template(servings_per_day: u32) -> Vec<SlotType> {
    let mut slots: Vec<SlotType> = SLOT_TEMPLATE
        .iter()
        .copied()
        .cycle()
        .take(servings_per_day as usize)
        .collect();
    slots.sort();
    slots
}
