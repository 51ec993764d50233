use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("Vectors are of different lengths: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}
