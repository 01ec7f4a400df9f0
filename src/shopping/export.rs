use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{MealPlan, ShoppingListItem};

/// Plain-text share format: one `name - amount unit` line per item.
pub fn format_shopping_list(items: &[ShoppingListItem]) -> String {
    items
        .iter()
        .map(|item| format!("{} - {} {}", item.name, item.formatted_amount(), item.unit))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the shopping list to a CSV file.
pub fn write_shopping_list_csv(items: &[ShoppingListItem], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["name", "amount", "unit", "recipes"])?;

    for item in items {
        wtr.write_record([
            item.name.clone(),
            item.formatted_amount(),
            item.unit.clone(),
            item.recipes.join("; "),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the plan and its shopping list to a JSON file.
pub fn write_plan_json(plan: &MealPlan, items: &[ShoppingListItem], path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "mealPlan": plan,
        "shoppingList": items,
    });

    fs::write(path, serde_json::to_string_pretty(&json)?)?;
    Ok(())
}
