//! Settings controlling how datasets are read and how names are matched.

use std::{env, str::FromStr};

use crate::{
    clustering::{DEFAULT_LOOKUP_LIMIT, DEFAULT_LOOKUP_THRESHOLD, DEFAULT_MAPPING_THRESHOLD},
    error::DedupError,
};

pub const ENV_MAPPING_THRESHOLD: &str = "GAME_DEDUP_MAPPING_THRESHOLD";
pub const ENV_LOOKUP_THRESHOLD: &str = "GAME_DEDUP_LOOKUP_THRESHOLD";
pub const ENV_LOOKUP_LIMIT: &str = "GAME_DEDUP_LOOKUP_LIMIT";
pub const ENV_NAME_COLUMN: &str = "GAME_DEDUP_NAME_COLUMN";
pub const ENV_HAS_HEADERS: &str = "GAME_DEDUP_HAS_HEADERS";

/// Top-level configuration for deduplicating a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct DedupConfig {
    /// Minimum similarity for names to share a standard name
    pub mapping_threshold: f64,
    /// Minimum similarity for a name to be reported by a lookup
    pub lookup_threshold: f64,
    /// Maximum number of names reported by a lookup, `None` for no limit
    pub lookup_limit: Option<usize>,
    /// Where each field lives in a dataset row
    pub columns: DatasetColumns,
    /// Whether the first CSV row is a header row
    pub has_headers: bool,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            mapping_threshold: DEFAULT_MAPPING_THRESHOLD,
            lookup_threshold: DEFAULT_LOOKUP_THRESHOLD,
            lookup_limit: Some(DEFAULT_LOOKUP_LIMIT),
            columns: DatasetColumns::default(),
            has_headers: false,
        }
    }
}

/// Zero-based indices of the CSV columns making up a dataset row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetColumns {
    pub user_id: usize,
    pub game_name: usize,
    pub behaviour: usize,
    pub value: usize,
}

impl Default for DatasetColumns {
    fn default() -> Self {
        Self {
            user_id: 0,
            game_name: 1,
            behaviour: 2,
            value: 3,
        }
    }
}

impl DedupConfig {
    /// Default configuration, overridden by any of the `GAME_DEDUP_*` environment variables
    /// which are set
    pub fn from_env() -> Result<Self, DedupError> {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Overrides values using `lookup`, which maps an environment variable name to its value
    fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, DedupError> {
        if let Some(value) = lookup(ENV_MAPPING_THRESHOLD) {
            self.mapping_threshold = parse_value(ENV_MAPPING_THRESHOLD, &value)?;
        }

        if let Some(value) = lookup(ENV_LOOKUP_THRESHOLD) {
            self.lookup_threshold = parse_value(ENV_LOOKUP_THRESHOLD, &value)?;
        }

        if let Some(value) = lookup(ENV_LOOKUP_LIMIT) {
            self.lookup_limit = match value.trim().to_lowercase().as_str() {
                "" | "none" => None,
                _ => Some(parse_value(ENV_LOOKUP_LIMIT, &value)?),
            };
        }

        if let Some(value) = lookup(ENV_NAME_COLUMN) {
            self.columns.game_name = parse_value(ENV_NAME_COLUMN, &value)?;
        }

        if let Some(value) = lookup(ENV_HAS_HEADERS) {
            self.has_headers = match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(DedupError::InvalidConfig(format!(
                        "{ENV_HAS_HEADERS} must be a boolean, got {value:?}"
                    )));
                }
            };
        }

        tracing::debug!("Loaded configuration: {self:?}");

        Ok(self)
    }

    pub fn with_mapping_threshold(mut self, threshold: f64) -> Self {
        self.mapping_threshold = threshold;
        self
    }

    pub fn with_lookup_threshold(mut self, threshold: f64) -> Self {
        self.lookup_threshold = threshold;
        self
    }

    pub fn with_lookup_limit(mut self, limit: Option<usize>) -> Self {
        self.lookup_limit = limit;
        self
    }

    pub fn with_columns(mut self, columns: DatasetColumns) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, DedupError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| DedupError::InvalidConfig(format!("{key} has an invalid value: {value:?}")))
}
