use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constraints::PrepTimeLimit;
use super::recipe::Recipe;
use crate::error::PlanError;

/// Meal category of a plan slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl SlotType {
    /// Fixed order of slots within a day.
    pub const ORDER: [SlotType; 4] = [
        SlotType::Breakfast,
        SlotType::Lunch,
        SlotType::Dinner,
        SlotType::Snack,
    ];

    /// Snack is the only optional slot.
    pub fn is_required(self) -> bool {
        !matches!(self, SlotType::Snack)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SlotType::Breakfast => "breakfast",
            SlotType::Lunch => "lunch",
            SlotType::Dinner => "dinner",
            SlotType::Snack => "snack",
        }
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(SlotType::Breakfast),
            "lunch" => Ok(SlotType::Lunch),
            "dinner" => Ok(SlotType::Dinner),
            "snack" => Ok(SlotType::Snack),
            other => Err(PlanError::InvalidConstraints(format!(
                "unknown meal slot '{other}'"
            ))),
        }
    }
}

/// One recipe assigned to one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanSlot {
    pub recipe: Recipe,

    /// `None` for allow-list plans, which are not slot-typed.
    pub slot_type: Option<SlotType>,

    /// Zero-based day.
    pub day_index: u32,
}

impl MealPlanSlot {
    pub fn new(recipe: Recipe, slot_type: Option<SlotType>, day_index: u32) -> Self {
        Self {
            recipe,
            slot_type,
            day_index,
        }
    }

    /// Slot type if assigned, otherwise the recipe's own first category.
    pub fn display_slot(&self) -> Option<SlotType> {
        self.slot_type.or_else(|| self.recipe.display_slot())
    }
}

/// A generated plan: ordered by day, then by slot order within the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub days: u32,
    pub servings_per_day: u32,
    pub prep_time: PrepTimeLimit,
    pub meals: Vec<MealPlanSlot>,
}

impl MealPlan {
    /// Recipes in plan order, one entry per slot.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.meals.iter().map(|slot| &slot.recipe)
    }

    /// Slots of a single day.
    pub fn day(&self, day_index: u32) -> Vec<&MealPlanSlot> {
        self.meals
            .iter()
            .filter(|slot| slot.day_index == day_index)
            .collect()
    }

    /// Slots grouped per day; always `days` groups.
    pub fn by_day(&self) -> Vec<Vec<&MealPlanSlot>> {
        (0..self.days).map(|day| self.day(day)).collect()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_type_parse_and_display() {
        assert_eq!("Dinner".parse::<SlotType>().unwrap(), SlotType::Dinner);
        assert_eq!(SlotType::Snack.to_string(), "snack");
        assert!("brunch".parse::<SlotType>().is_err());
    }

    #[test]
    fn test_required_slots() {
        let required: Vec<SlotType> = SlotType::ORDER
            .into_iter()
            .filter(|s| s.is_required())
            .collect();
        assert_eq!(
            required,
            vec![SlotType::Breakfast, SlotType::Lunch, SlotType::Dinner]
        );
    }

    #[test]
    fn test_slot_serializes_lowercase() {
        let json = serde_json::to_value(SlotType::Lunch).unwrap();
        assert_eq!(json, "lunch");
    }
}
