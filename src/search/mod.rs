mod metric;
mod neighbors;

#[cfg(test)]
mod tests;

pub use metric::Metric;
pub use neighbors::{Farthest, Nearest};

/// Pluggable k-best / k-worst selection over a lazy candidate sequence
pub trait SearchStrategy: Send + Sync {
    /// Rank candidates against a target vector
    ///
    /// # Arguments
    /// * `target` - Vector to compare every candidate against
    /// * `candidates` - Single-pass sequence of candidate vectors
    /// * `k` - Maximum number of positions to return
    ///
    /// # Returns
    /// Positions (in yield order of `candidates`) of at most `k` matches,
    /// best match first. Implementations must finish reading `candidates`
    /// before returning.
    fn search<'a>(
        &self,
        target: &[f32],
        candidates: &mut dyn Iterator<Item = &'a [f32]>,
        k: usize,
    ) -> Vec<usize>;
}
