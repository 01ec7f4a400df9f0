use thiserror::Error;

use crate::models::SlotType;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("No recipes available for meal plan generation")]
    EmptyPool,

    #[error("No eligible recipes for required {slot} slot")]
    MissingSlotCandidates { slot: SlotType },

    #[error("Recipe catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Invalid constraints: {0}")]
    InvalidConstraints(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
