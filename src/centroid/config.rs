use super::CentroidError;
use crate::search::Metric;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CentroidConfig {
    pub capacity: usize,
    /// Metric for nearest-neighbor lookups and receiver choice
    pub knn: Metric,
    /// Metric for worst-fit drains
    pub kfn: Metric,
}

impl CentroidConfig {
    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(raw: &str) -> Result<Self, CentroidError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .context(format!("Failed to read centroid config at {}", path.display()))?;
        let config = Self::from_json(&raw)
            .context(format!("Failed to parse centroid config at {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            capacity = config.capacity,
            knn = %config.knn,
            kfn = %config.kfn,
            "centroid config loaded"
        );
        Ok(config)
    }
}

impl Default for CentroidConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            knn: Metric::Cosine,
            kfn: Metric::Cosine,
        }
    }
}
