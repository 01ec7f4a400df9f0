use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use super::{select_ids, RecipeCatalog};
use crate::error::{PlanError, Result};
use crate::models::Recipe;

/// Load recipes from a JSON file.
///
/// Accepts either a bare array or an object with a `recipes` array.
/// Deduplicates by id: the last occurrence wins but keeps the position of
/// the first.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    let rows = match serde_json::from_str::<Value>(&content)? {
        rows @ Value::Array(_) => rows,
        Value::Object(mut map) => map.remove("recipes").ok_or_else(|| {
            PlanError::CatalogUnavailable("catalog object has no 'recipes' array".to_string())
        })?,
        _ => {
            return Err(PlanError::CatalogUnavailable(
                "catalog must be a JSON array of recipes".to_string(),
            ));
        }
    };
    let recipes: Vec<Recipe> = serde_json::from_value(rows)?;

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<Recipe> = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        match positions.get(&recipe.id) {
            Some(&position) => {
                warn!(id = %recipe.id, "duplicate recipe id, keeping the last one");
                deduped[position] = recipe;
            }
            None => {
                positions.insert(recipe.id.clone(), deduped.len());
                deduped.push(recipe);
            }
        }
    }

    Ok(deduped)
}

/// Catalog backed by a JSON file, read on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecipeCatalog for JsonFileCatalog {
    fn fetch(&self, ids: Option<&[String]>) -> Result<Vec<Recipe>> {
        let recipes = load_recipes(&self.path).map_err(|err| {
            PlanError::CatalogUnavailable(format!("{}: {}", self.path.display(), err))
        })?;
        debug!(path = %self.path.display(), recipes = recipes.len(), "loaded recipe catalog");
        Ok(select_ids(&recipes, ids))
    }
}
