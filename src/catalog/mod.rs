mod persistence;

pub use persistence::{load_recipes, JsonFileCatalog};

use crate::error::Result;
use crate::models::Recipe;

/// Source of the recipe pool.
///
/// `ids` restricts the result to an allow-list; `None` returns every recipe.
/// Implementations report fetch failures as
/// [`PlanError::CatalogUnavailable`](crate::error::PlanError::CatalogUnavailable)
/// rather than returning an empty pool.
pub trait RecipeCatalog {
    fn fetch(&self, ids: Option<&[String]>) -> Result<Vec<Recipe>>;
}

/// Catalog over recipes already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    recipes: Vec<Recipe>,
}

impl InMemoryCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl RecipeCatalog for InMemoryCatalog {
    fn fetch(&self, ids: Option<&[String]>) -> Result<Vec<Recipe>> {
        Ok(select_ids(&self.recipes, ids))
    }
}

/// Clone the recipes matching `ids`, in catalog order.
pub(crate) fn select_ids(recipes: &[Recipe], ids: Option<&[String]>) -> Vec<Recipe> {
    match ids {
        Some(ids) => recipes
            .iter()
            .filter(|r| ids.contains(&r.id))
            .cloned()
            .collect(),
        None => recipes.to_vec(),
    }
}
