use crate::models::{MealPlan, Recipe, ShoppingListItem};

/// Display a meal plan grouped by day.
pub fn display_meal_plan(plan: &MealPlan) {
    if plan.is_empty() {
        println!("No meal plan generated.");
        return;
    }

    println!();
    println!("=== Meal Plan ({} days, prep time: {}) ===", plan.days, plan.prep_time);

    for (day, slots) in plan.by_day().into_iter().enumerate() {
        println!();
        println!("Day {}", day + 1);

        let max_label_len = slots
            .iter()
            .map(|s| s.display_slot().map(|slot| slot.as_str().len()).unwrap_or(0))
            .max()
            .unwrap_or(0);

        for slot in slots {
            let label = slot
                .display_slot()
                .map(|s| s.as_str())
                .unwrap_or_default();
            let recipe = &slot.recipe;

            println!(
                "  {:<width$}  {} ({} min prep, {} min cook)",
                label,
                recipe.name,
                recipe.prep_time,
                recipe.cook_time,
                width = max_label_len
            );
        }
    }

    println!();
}

/// Display the aggregated shopping list.
pub fn display_shopping_list(items: &[ShoppingListItem]) {
    if items.is_empty() {
        println!("Shopping list: (empty)");
        return;
    }

    println!("=== Shopping List ({} items) ===", items.len());
    println!();

    let max_name_len = items
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(10);

    for item in items {
        println!(
            "  {:<width$}  {:>8} {}",
            item.name,
            item.formatted_amount(),
            item.unit,
            width = max_name_len
        );
    }

    println!();
}

/// Display a simple list of recipes with their details.
pub fn display_recipe_list(recipes: &[&Recipe], title: &str) {
    if recipes.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} recipes) ===", title, recipes.len());
    println!();

    for recipe in recipes {
        let slots: Vec<&str> = crate::models::SlotType::ORDER
            .into_iter()
            .filter(|slot| recipe.fits_slot(*slot))
            .map(|slot| slot.as_str())
            .collect();

        println!(
            "  [{}] {} - prep {} min, cook {} min, serves {}, slots: {}",
            recipe.id,
            recipe.name,
            recipe.prep_time,
            recipe.cook_time,
            recipe.servings,
            if slots.is_empty() {
                "-".to_string()
            } else {
                slots.join("/")
            }
        );
    }

    println!();
}
