mod de;

pub mod constraints;
pub mod plan;
pub mod recipe;
pub mod shopping;

pub use constraints::{Constraints, PrepTimeLimit, SelectionStrategy};
pub use plan::{MealPlan, MealPlanSlot, SlotType};
pub use recipe::{Ingredient, Recipe};
pub use shopping::ShoppingListItem;
