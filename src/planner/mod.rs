pub mod constants;
pub mod filter;
pub mod generate;
pub mod rotation;
pub mod selection;

pub use constants::*;
pub use filter::{
    eligible_pool, filter_by_exclusions, filter_by_prep_time, filter_by_servings, filter_by_slot,
    filter_by_tags, restrict_to_ids,
};
pub use generate::{generate_from_catalog, generate_meal_plan};
pub use rotation::{draw_rotating, select_from_allow_list};
pub use selection::{pick_avoiding_repeat, select_by_category};
