pub mod prompts;
pub mod render;

pub use prompts::{
    collect_plan_constraints, known_ingredients, prompt_days, prompt_excluded_products,
    prompt_prep_time, prompt_recipe_selection, prompt_servings_per_day, prompt_yes_no,
};
pub use render::{display_meal_plan, display_recipe_list, display_shopping_list};
