mod error;
mod mean;
mod similarity;


pub use error::VectorError;
pub use mean::mean;
pub use similarity::{cosine_distance, cosine_similarity, euclidean_distance};
