use thiserror::Error;

#[derive(Error, Debug)]
pub enum CentroidError {
    #[error("Missing {0} search strategy")]
    MissingSearchStrategy(&'static str),

    #[error("Invalid centroid config: {0}")]
    Config(#[from] serde_json::Error),
}
