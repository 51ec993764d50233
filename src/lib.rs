// Public API exports
pub mod centroid;
pub mod payload;
pub mod search;
pub mod vector;

// Re-export main types for convenience
pub use centroid::{
    Centroid, CentroidBuilder, CentroidConfig, CentroidError, DEFAULT_CAPACITY,
    DistributeSummary, distribute_within,
};

pub use payload::{Payload, PayloadContainer, PayloadReceiver, RejectReason, Rejected};

pub use search::{Farthest, Metric, Nearest, SearchStrategy};

pub use vector::{VectorError, cosine_distance, cosine_similarity, euclidean_distance, mean};
