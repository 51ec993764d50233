use crate::vector::{VectorError, cosine_similarity, euclidean_distance};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Similarity measure used to rank candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Cosine,
    Euclidean,
}

impl Metric {
    /// Score where a higher value always means closer
    pub fn closeness(&self, a: &[f32], b: &[f32]) -> Result<f32, VectorError> {
        match self {
            Metric::Cosine => cosine_similarity(a, b),
            Metric::Euclidean => euclidean_distance(a, b).map(|d| -d),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Cosine => write!(f, "cosine"),
            Metric::Euclidean => write!(f, "euclidean"),
        }
    }
}
