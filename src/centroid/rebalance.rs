use super::Centroid;
use crate::payload::{PayloadContainer, PayloadReceiver};
use crate::search::SearchStrategy;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of one redistribution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistributeSummary {
    pub drained: usize,
    /// Payloads now owned by a different receiver
    pub moved: usize,
    /// Payloads that ended up back in the source
    pub returned: usize,
}

impl<P: PayloadContainer> Centroid<P> {
    /// Drain the `n` worst-fit payloads and offer each to the receiver whose
    /// vector the nearest-neighbor strategy ranks best.
    ///
    /// A payload with no matching receiver, or refused by the one chosen, goes
    /// back into `self`. Every drained payload ends in exactly one place.
    pub fn distribute_payload<R>(&mut self, n: usize, receivers: &mut [R]) -> DistributeSummary
    where
        R: PayloadReceiver<P>,
    {
        if receivers.is_empty() {
            return DistributeSummary::default();
        }

        let data = self.drain_ordered(n);
        let knn = Arc::clone(&self.knn_search);
        let mut summary = DistributeSummary {
            drained: data.len(),
            ..Default::default()
        };

        for payload in data {
            match offer(&*knn, payload, receivers) {
                Ok(_) => summary.moved += 1,
                Err(payload) => {
                    self.restore(payload);
                    summary.returned += 1;
                }
            }
        }

        debug!(
            drained = summary.drained,
            moved = summary.moved,
            returned = summary.returned,
            "payloads distributed"
        );
        summary
    }
}

/// Redistribute from `centroids[source]` with every centroid in the slice,
/// the source included, as a candidate receiver.
///
/// Payloads whose best match is the source itself stay there and count as
/// returned.
pub fn distribute_within<P>(
    centroids: &mut [Centroid<P>],
    source: usize,
    n: usize,
) -> DistributeSummary
where
    P: PayloadContainer,
{
    let Some(origin) = centroids.get_mut(source) else {
        warn!(
            source,
            count = centroids.len(),
            "distribution source out of range"
        );
        return DistributeSummary::default();
    };

    let data = origin.drain_ordered(n);
    let knn = Arc::clone(&origin.knn_search);
    let mut summary = DistributeSummary {
        drained: data.len(),
        ..Default::default()
    };

    for payload in data {
        match offer(&*knn, payload, centroids) {
            Ok(target) if target != source => summary.moved += 1,
            Ok(_) => summary.returned += 1,
            Err(payload) => {
                centroids[source].restore(payload);
                summary.returned += 1;
            }
        }
    }

    debug!(
        source,
        drained = summary.drained,
        moved = summary.moved,
        returned = summary.returned,
        "payloads distributed within set"
    );
    summary
}

/// Hand `payload` to the receiver ranked best by `knn`, returning its position.
/// Gives the payload back when nothing matches or the receiver refuses it.
fn offer<P, R>(knn: &dyn SearchStrategy, payload: P, receivers: &mut [R]) -> Result<usize, P>
where
    P: PayloadContainer,
    R: PayloadReceiver<P>,
{
    let best = {
        let mut vecs = receivers.iter().map(|r| r.vec());
        knn.search(payload.vec(), &mut vecs, 1)
    };

    let Some(&target) = best.first() else {
        return Err(payload);
    };
    let Some(receiver) = receivers.get_mut(target) else {
        return Err(payload);
    };

    match receiver.add_payload(payload) {
        Ok(()) => Ok(target),
        Err(rejected) => {
            debug!(target, reason = %rejected.reason, "receiver refused payload");
            Err(rejected.into_payload())
        }
    }
}
