// src/config.rs
//
// Catalog configuration
//
// Every field has a default, so an empty JSON object is a complete config.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Day of the first public film screening
const FIRST_SCREENING: (i32, u32, u32) = (1895, 12, 28);

/// Count used by the popular-films listing when the caller gives none
const DEFAULT_POPULAR_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Films released before this day are rejected
    pub earliest_release_date: NaiveDate,

    pub default_popular_count: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let (year, month, day) = FIRST_SCREENING;
        Self {
            earliest_release_date: NaiveDate::from_ymd_opt(year, month, day)
                .expect("first screening is a valid calendar date"),
            default_popular_count: DEFAULT_POPULAR_COUNT,
        }
    }
}

impl CatalogConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let config: CatalogConfig =
            serde_json::from_str(raw).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.default_popular_count == 0 {
            return Err(AppError::Config(
                "default_popular_count must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
