pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod shopping;
pub mod state;

pub use catalog::{InMemoryCatalog, JsonFileCatalog, RecipeCatalog};
pub use error::{PlanError, Result};
pub use models::{
    Constraints, Ingredient, MealPlan, MealPlanSlot, PrepTimeLimit, Recipe, SelectionStrategy,
    ShoppingListItem, SlotType,
};
pub use planner::{generate_from_catalog, generate_meal_plan};
pub use shopping::generate_shopping_list;
