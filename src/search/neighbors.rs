use super::{Metric, SearchStrategy};

/// k-nearest-neighbor search: closest candidates first
#[derive(Debug, Clone, Copy, Default)]
pub struct Nearest(pub Metric);

/// k-farthest-neighbor search: least similar candidates first
#[derive(Debug, Clone, Copy, Default)]
pub struct Farthest(pub Metric);

impl SearchStrategy for Nearest {
    fn search<'a>(
        &self,
        target: &[f32],
        candidates: &mut dyn Iterator<Item = &'a [f32]>,
        k: usize,
    ) -> Vec<usize> {
        let mut scored = score_all(self.0, target, candidates);
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        take_positions(scored, k)
    }
}

impl SearchStrategy for Farthest {
    fn search<'a>(
        &self,
        target: &[f32],
        candidates: &mut dyn Iterator<Item = &'a [f32]>,
        k: usize,
    ) -> Vec<usize> {
        let mut scored = score_all(self.0, target, candidates);
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        take_positions(scored, k)
    }
}

/// Drain the candidate sequence, pairing each comparable vector with its score.
/// Candidates of the wrong length (or scoring NaN) are skipped.
fn score_all<'a>(
    metric: Metric,
    target: &[f32],
    candidates: &mut dyn Iterator<Item = &'a [f32]>,
) -> Vec<(usize, f32)> {
    let mut scored = Vec::new();

    for (pos, vec) in candidates.enumerate() {
        match metric.closeness(target, vec) {
            Ok(score) if !score.is_nan() => scored.push((pos, score)),
            Ok(_) => tracing::trace!(position = pos, "skipping NaN-scored candidate"),
            Err(e) => tracing::trace!(position = pos, error = %e, "skipping candidate"),
        }
    }

    scored
}

fn take_positions(mut scored: Vec<(usize, f32)>, k: usize) -> Vec<usize> {
    scored.truncate(k);
    scored.into_iter().map(|(pos, _)| pos).collect()
}
