use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::models::{Recipe, ShoppingListItem};

/// Merge the ingredients of `recipes` into one list.
///
/// Lines sharing the raw `(name, unit)` pair are summed and remember every
/// contributing recipe name, duplicates included. Output keeps the order in
/// which each key first appeared. Recipes whose ingredient list is missing
/// or malformed are skipped with a warning.
pub fn aggregate<'a, I>(recipes: I) -> Vec<ShoppingListItem>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut items: Vec<ShoppingListItem> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for recipe in recipes {
        let Some(ingredients) = recipe.ingredient_list() else {
            warn!(recipe = %recipe.name, id = %recipe.id, "skipping recipe with malformed ingredients");
            continue;
        };

        for ingredient in ingredients {
            let key = (ingredient.name.clone(), ingredient.unit.clone());
            match index.get(&key) {
                Some(&position) => {
                    let item = &mut items[position];
                    item.amount += ingredient.amount;
                    item.recipes.push(recipe.name.clone());
                }
                None => {
                    index.insert(key, items.len());
                    items.push(ShoppingListItem::new(
                        ingredient.name.clone(),
                        ingredient.amount,
                        ingredient.unit.clone(),
                        recipe.name.clone(),
                    ));
                }
            }
        }
    }

    debug!(items = items.len(), "aggregated shopping list");
    items
}

/// Shopping list for the recipes of a plan, one entry per meal.
///
/// Pass `plan.recipes()` to shop for a whole [`MealPlan`](crate::models::MealPlan).
pub fn generate_shopping_list<'a, I>(recipes: I) -> Vec<ShoppingListItem>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let items = aggregate(recipes);
    info!(items = items.len(), "shopping list generated");
    items
}
