use serde::{Deserialize, Serialize};

/// One consolidated shopping list line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub name: String,

    /// Sum of every contributing ingredient amount.
    pub amount: f64,

    pub unit: String,

    /// Name of the contributing recipe, once per contribution.
    pub recipes: Vec<String>,
}

impl ShoppingListItem {
    pub fn new(name: String, amount: f64, unit: String, recipe: String) -> Self {
        Self {
            name,
            amount,
            unit,
            recipes: vec![recipe],
        }
    }

    /// Aggregation identity: raw name and unit.
    pub fn key(&self) -> (&str, &str) {
        (&self.name, &self.unit)
    }

    /// Amount as the shortest text that reads back to the same value.
    /// Whole numbers print without a fraction; nothing is rounded.
    pub fn formatted_amount(&self) -> String {
        self.amount.to_string()
    }
}
