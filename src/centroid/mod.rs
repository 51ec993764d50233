mod builder;
mod config;
mod error;
mod generator;
mod rebalance;


pub use builder::CentroidBuilder;
pub use config::{CentroidConfig, DEFAULT_CAPACITY};
pub use error::CentroidError;
pub use rebalance::{DistributeSummary, distribute_within};

use crate::payload::{PayloadContainer, PayloadReceiver, RejectReason, Rejected};
use crate::search::SearchStrategy;
use crate::vector;
use generator::{PayloadVecs, Visit};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Mutable cluster representative: a mean vector plus the payloads assigned to it.
///
/// Store order carries no meaning; removals reshuffle it.
pub struct Centroid<P> {
    vec: Vec<f32>,
    data_points: Vec<P>,
    /// Ranks payloads closest-first (lookups, receiver choice)
    knn_search: Arc<dyn SearchStrategy>,
    /// Ranks payloads worst-fit-first (ordered drains)
    kfn_search: Arc<dyn SearchStrategy>,
}

impl<P: PayloadContainer> Centroid<P> {
    pub fn new(
        init_vec: &[f32],
        capacity: usize,
        knn_search: Arc<dyn SearchStrategy>,
        kfn_search: Arc<dyn SearchStrategy>,
    ) -> Self {
        trace!(dim = init_vec.len(), capacity, "creating centroid");

        Self {
            vec: init_vec.to_vec(),
            data_points: Vec::with_capacity(capacity),
            knn_search,
            kfn_search,
        }
    }

    pub fn vec(&self) -> &[f32] {
        &self.vec
    }

    /// Read-only view of the backing store, including unswept expired payloads
    pub fn payloads(&self) -> &[P] {
        &self.data_points
    }

    /// Number of stored payloads. Not filtered for expiry; call `expire` first
    /// for an exact live count.
    pub fn len_dp(&self) -> usize {
        self.data_points.len()
    }

    pub fn capacity(&self) -> usize {
        self.data_points.capacity()
    }

    /// Accept a payload whose vector matches this centroid's length and which
    /// has not expired. On rejection the payload is handed back untouched.
    pub fn add_payload(&mut self, payload: P) -> Result<(), Rejected<P>> {
        let actual = payload.vec().len();
        if actual != self.vec.len() {
            return Err(Rejected::new(
                RejectReason::DimensionMismatch {
                    expected: self.vec.len(),
                    actual,
                },
                payload,
            ));
        }
        if payload.expired() {
            return Err(Rejected::new(RejectReason::Expired, payload));
        }

        self.data_points.push(payload);
        Ok(())
    }

    pub(crate) fn restore(&mut self, payload: P) {
        self.data_points.push(payload);
    }

    /// Remove up to `n` live payloads in no particular order. Expired payloads
    /// met along the way are discarded and do not count towards `n`.
    pub fn drain_unordered(&mut self, n: usize) -> Vec<P> {
        let mut res = Vec::with_capacity(n.min(self.data_points.len()));
        let mut discarded = 0usize;

        while res.len() < n {
            match self.data_points.pop() {
                Some(payload) if payload.expired() => discarded += 1,
                Some(payload) => res.push(payload),
                None => break,
            }
        }

        trace!(requested = n, drained = res.len(), discarded, "unordered drain");
        res
    }

    /// Remove the `n` payloads the farthest-neighbor strategy ranks as the worst
    /// fit for this centroid's vector, worst first.
    pub fn drain_ordered(&mut self, n: usize) -> Vec<P> {
        let (matches, visit) = self.search_store(&*self.kfn_search, &self.vec, n);
        let res = self.take_positions(&matches, &visit.expired);

        trace!(
            requested = n,
            drained = res.len(),
            evicted = visit.expired.len(),
            "ordered drain"
        );
        res
    }

    /// Remove every expired payload. Reserved capacity is kept; see `mem_trim`.
    pub fn expire(&mut self) {
        let before = self.data_points.len();
        self.data_points.retain(|p| !p.expired());

        let removed = before - self.data_points.len();
        if removed > 0 {
            debug!(removed, remaining = self.data_points.len(), "expired payloads swept");
        }
    }

    /// Rebuild the backing store with capacity equal to the live count.
    ///
    /// Costly: the new store is allocated before the old one is released, so
    /// peak memory briefly doubles. Meant for periodic use, not every cycle.
    pub fn mem_trim(&mut self) {
        let old_capacity = self.data_points.capacity();
        self.data_points.retain(|p| !p.expired());

        let mut trimmed = Vec::with_capacity(self.data_points.len());
        trimmed.append(&mut self.data_points);
        self.data_points = trimmed;

        debug!(
            old_capacity,
            new_capacity = self.data_points.capacity(),
            "centroid store trimmed"
        );
    }

    /// Move the centroid vector to the mean of all live payload vectors.
    ///
    /// Returns false, leaving the vector unchanged, when no live payloads remain.
    pub fn move_vector(&mut self) -> bool {
        let mut vecs = PayloadVecs::new(&self.data_points);
        let mean = vector::mean(&mut vecs);
        let visit = vecs.finish();

        self.evict_in_order(&visit.expired);

        match mean {
            Some(vec) => {
                self.vec = vec;
                true
            }
            None => {
                trace!("no live payloads, centroid vector left in place");
                false
            }
        }
    }

    /// Best `k` matches for `vec` under the nearest-neighbor strategy, best first.
    /// Expired payloads met during the search are evicted.
    pub fn knn_lookup(&mut self, vec: &[f32], k: usize) -> Vec<&P> {
        let (matches, visit) = self.search_store(&*self.knn_search, vec, k);
        let evicted = self.evict_in_order(&visit.expired);

        matches
            .into_iter()
            .map(|pos| &self.data_points[pos - evicted.partition_point(|&e| e < pos)])
            .collect()
    }

    pub fn knn_drain(&mut self, vec: &[f32], k: usize) -> Vec<P> {
        let (matches, visit) = self.search_store(&*self.knn_search, vec, k);
        self.take_positions(&matches, &visit.expired)
    }

    /// Run `strategy` over a fresh generator and map the positions it returns
    /// back to store positions. Out-of-range and repeated positions are dropped
    /// and at most `k` matches are kept, in the strategy's rank order.
    fn search_store(
        &self,
        strategy: &dyn SearchStrategy,
        target: &[f32],
        k: usize,
    ) -> (Vec<usize>, Visit) {
        let mut vecs = PayloadVecs::new(&self.data_points);
        let ranked = strategy.search(target, &mut vecs, k);
        let visit = vecs.finish();

        let mut seen = HashSet::with_capacity(ranked.len());
        let matches: Vec<usize> = ranked
            .into_iter()
            .filter_map(|pos| visit.yielded.get(pos).copied())
            .filter(|&store_pos| seen.insert(store_pos))
            .take(k)
            .collect();

        (matches, visit)
    }

    /// Remove `drain` and `evict` store positions in one pass, highest position
    /// first, so `swap_remove` never relocates a position still pending.
    /// Drained payloads are returned in the order of `drain`.
    fn take_positions(&mut self, drain: &[usize], evict: &[usize]) -> Vec<P> {
        let mut plan: Vec<(usize, Option<usize>)> = drain
            .iter()
            .enumerate()
            .map(|(rank, &pos)| (pos, Some(rank)))
            .chain(evict.iter().map(|&pos| (pos, None)))
            .collect();
        plan.sort_unstable_by(|a, b| b.0.cmp(&a.0));

        let mut slots: Vec<Option<P>> = (0..drain.len()).map(|_| None).collect();
        for (pos, rank) in plan {
            let payload = self.data_points.swap_remove(pos);
            if let Some(rank) = rank {
                slots[rank] = Some(payload);
            }
        }

        slots.into_iter().flatten().collect()
    }

    /// Remove the given ascending store positions while keeping the order of
    /// everything else. Returns the positions for index translation.
    fn evict_in_order<'e>(&mut self, evict: &'e [usize]) -> &'e [usize] {
        if evict.is_empty() {
            return evict;
        }

        let mut pos = 0usize;
        self.data_points.retain(|_| {
            let keep = evict.binary_search(&pos).is_err();
            pos += 1;
            keep
        });

        trace!(evicted = evict.len(), "expired payloads evicted during scan");
        evict
    }
}

impl<P: PayloadContainer> PayloadReceiver<P> for Centroid<P> {
    fn vec(&self) -> &[f32] {
        &self.vec
    }

    fn add_payload(&mut self, payload: P) -> Result<(), Rejected<P>> {
        Centroid::add_payload(self, payload)
    }
}

impl<P> fmt::Debug for Centroid<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Centroid")
            .field("vec", &self.vec)
            .field("data_points", &self.data_points.len())
            .finish_non_exhaustive()
    }
}
