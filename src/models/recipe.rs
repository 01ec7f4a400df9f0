use serde::{Deserialize, Serialize};

use super::de;
use super::plan::SlotType;

/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,

    #[serde(alias = "quantity", deserialize_with = "de::lenient_amount")]
    pub amount: f64,

    /// Metric unit, e.g. `g`, `ml`, `бр.`.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }
}

/// A catalog recipe.
///
/// Recipes are read-only inputs to planning. Equality and hashing use the
/// opaque `id` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(deserialize_with = "de::opaque_id")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_steps")]
    pub instructions: Vec<String>,

    /// `None` when the stored ingredient column is missing or malformed.
    #[serde(default, deserialize_with = "de::lenient_ingredients")]
    pub ingredients: Option<Vec<Ingredient>>,

    /// Preparation time in minutes.
    #[serde(default, alias = "prepTime", deserialize_with = "de::lenient_count")]
    pub prep_time: u32,

    /// Cooking time in minutes.
    #[serde(default, alias = "cookTime", deserialize_with = "de::lenient_count")]
    pub cook_time: u32,

    #[serde(default, deserialize_with = "de::lenient_count")]
    pub servings: u32,

    #[serde(default, alias = "isBreakfast", deserialize_with = "de::null_as_default")]
    pub is_breakfast: bool,

    #[serde(default, alias = "isLunch", deserialize_with = "de::null_as_default")]
    pub is_lunch: bool,

    #[serde(default, alias = "isDinner", deserialize_with = "de::null_as_default")]
    pub is_dinner: bool,

    #[serde(default, alias = "isSnack", deserialize_with = "de::null_as_default")]
    pub is_snack: bool,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub tags: Vec<String>,
}

impl Recipe {
    /// Whether the recipe is flagged for the given meal slot.
    pub fn fits_slot(&self, slot: SlotType) -> bool {
        match slot {
            SlotType::Breakfast => self.is_breakfast,
            SlotType::Lunch => self.is_lunch,
            SlotType::Dinner => self.is_dinner,
            SlotType::Snack => self.is_snack,
        }
    }

    /// First flagged slot in plan order. Display grouping only.
    pub fn display_slot(&self) -> Option<SlotType> {
        SlotType::ORDER.into_iter().find(|slot| self.fits_slot(*slot))
    }

    /// Ingredient list, or `None` when the stored list is malformed.
    pub fn ingredient_list(&self) -> Option<&[Ingredient]> {
        self.ingredients.as_deref()
    }

    /// Whether any ingredient name contains `needle` (case-insensitive).
    /// A blank needle matches nothing.
    pub fn mentions_ingredient(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.ingredient_list()
            .unwrap_or_default()
            .iter()
            .any(|ingredient| ingredient.name.to_lowercase().contains(&needle))
    }

    /// Problems that would keep this recipe out of a well-formed catalog.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Recipe name is required".to_string());
        }

        match self.ingredient_list() {
            None => errors.push("Ingredient list is missing or malformed".to_string()),
            Some([]) => errors.push("Recipe must have at least one ingredient".to_string()),
            Some(ingredients) => {
                for (index, ingredient) in ingredients.iter().enumerate() {
                    if ingredient.name.trim().is_empty() {
                        errors.push(format!("Ingredient {} is missing a name", index + 1));
                    }
                    if !ingredient.amount.is_finite() || ingredient.amount < 0.0 {
                        errors.push(format!(
                            "Ingredient {} must have a non-negative amount",
                            index + 1
                        ));
                    }
                    if ingredient.unit.trim().is_empty() {
                        errors.push(format!("Ingredient {} is missing a unit", index + 1));
                    }
                }
            }
        }

        if self.instructions.is_empty() {
            errors.push("Recipe must have at least one instruction".to_string());
        }

        errors
    }

    /// Basic validation.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Recipe {}

impl std::hash::Hash for Recipe {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
