//! Last-used plan constraints, kept between CLI runs.
//!
//! Only the command line reads this file, to prefill prompts. Plan
//! generation itself never looks at it.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::Constraints;

/// Load saved constraints. A missing file yields `None`.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Option<Constraints>> {
    let content = match fs::read_to_string(path.as_ref()) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.as_ref().display(), "no saved plan settings");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    Ok(Some(serde_json::from_str(&content)?))
}

/// Save constraints for the next run.
pub fn save_settings<P: AsRef<Path>>(path: P, constraints: &Constraints) -> Result<()> {
    let json = serde_json::to_string_pretty(constraints)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PrepTimeLimit, SelectionStrategy};
    use tempfile::tempdir;

    #[test]
    fn test_missing_settings() {
        let dir = tempdir().unwrap();
        let loaded = load_settings(dir.path().join("plan_settings.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_settings_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan_settings.json");

        let constraints = Constraints::new(5, 3)
            .with_prep_time(PrepTimeLimit::Minutes(30))
            .with_selection(SelectionStrategy::CategoryFilter {
                excluded_products: vec!["Гъби".to_string()],
                include_snack: true,
            });

        save_settings(&path, &constraints).unwrap();
        let loaded = load_settings(&path).unwrap().unwrap();
        assert_eq!(loaded, constraints);
    }
}
