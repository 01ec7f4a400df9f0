use std::fmt;
use std::str::FromStr;

use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PlanError, Result};
use crate::planner::constants::{DEFAULT_DAYS, DEFAULT_PREP_MINUTES, DEFAULT_SERVINGS_PER_DAY};

/// Preparation time ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrepTimeLimit {
    #[default]
    Any,
    Minutes(u32),
}

impl PrepTimeLimit {
    /// Whether a recipe with `prep_time` minutes fits under the ceiling.
    #[inline]
    pub fn allows(self, prep_time: u32) -> bool {
        match self {
            PrepTimeLimit::Any => true,
            PrepTimeLimit::Minutes(max) => prep_time <= max,
        }
    }
}

impl fmt::Display for PrepTimeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrepTimeLimit::Any => f.write_str("any"),
            PrepTimeLimit::Minutes(max) => write!(f, "{max}"),
        }
    }
}

impl FromStr for PrepTimeLimit {
    type Err = PlanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("any") {
            return Ok(PrepTimeLimit::Any);
        }
        s.parse()
            .map(PrepTimeLimit::Minutes)
            .map_err(|_| PlanError::InvalidConstraints(format!("invalid prep time '{s}'")))
    }
}

// Wire form: the string "any" or a number of minutes (numeric strings accepted).
impl Serialize for PrepTimeLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            PrepTimeLimit::Any => serializer.serialize_str("any"),
            PrepTimeLimit::Minutes(max) => serializer.serialize_u32(*max),
        }
    }
}

impl<'de> Deserialize<'de> for PrepTimeLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(PrepTimeLimit::Any),
            Value::String(s) => s.parse().map_err(D::Error::custom),
            Value::Number(n) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .map(PrepTimeLimit::Minutes)
                .ok_or_else(|| D::Error::custom(format!("invalid prep time: {n}"))),
            other => Err(D::Error::custom(format!("invalid prep time: {other}"))),
        }
    }
}

/// How recipes are chosen for a plan.
///
/// The two modes are mutually exclusive; the `mode` tag picks one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Fill breakfast/lunch/dinner (and optionally snack) slots from recipes
    /// flagged for each slot, skipping recipes with excluded products.
    CategoryFilter {
        #[serde(default, rename = "excludedProducts")]
        excluded_products: Vec<String>,
        #[serde(default, rename = "includeSnack")]
        include_snack: bool,
    },

    /// Draw `days * servings_per_day` recipes from an explicit selection,
    /// or from the whole catalog when no ids are given.
    ExplicitAllowList {
        #[serde(default, rename = "selectedRecipeIds")]
        recipe_ids: Option<Vec<String>>,
    },
}

impl Default for SelectionStrategy {
    fn default() -> Self {
        SelectionStrategy::CategoryFilter {
            excluded_products: Vec::new(),
            include_snack: false,
        }
    }
}

impl SelectionStrategy {
    /// Ids to ask the catalog for. `None` means the whole catalog.
    pub fn requested_ids(&self) -> Option<&[String]> {
        match self {
            SelectionStrategy::ExplicitAllowList {
                recipe_ids: Some(ids),
            } => Some(ids.as_slice()),
            _ => None,
        }
    }
}

/// User constraints for one plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    pub days: u32,
    pub servings_per_day: u32,
    #[serde(default)]
    pub prep_time: PrepTimeLimit,
    #[serde(default)]
    pub selection: SelectionStrategy,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            servings_per_day: DEFAULT_SERVINGS_PER_DAY,
            prep_time: PrepTimeLimit::Minutes(DEFAULT_PREP_MINUTES),
            selection: SelectionStrategy::default(),
        }
    }
}

impl Constraints {
    pub fn new(days: u32, servings_per_day: u32) -> Self {
        Self {
            days,
            servings_per_day,
            prep_time: PrepTimeLimit::Any,
            selection: SelectionStrategy::default(),
        }
    }

    pub fn with_prep_time(mut self, prep_time: PrepTimeLimit) -> Self {
        self.prep_time = prep_time;
        self
    }

    pub fn with_selection(mut self, selection: SelectionStrategy) -> Self {
        self.selection = selection;
        self
    }

    /// Total number of meals in a quantity-driven plan.
    pub fn total_meals(&self) -> usize {
        self.days as usize * self.servings_per_day as usize
    }

    pub fn validate(&self) -> Result<()> {
        if self.days < 1 {
            return Err(PlanError::InvalidConstraints(
                "days must be at least 1".to_string(),
            ));
        }
        if self.servings_per_day < 1 {
            return Err(PlanError::InvalidConstraints(
                "servings per day must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
