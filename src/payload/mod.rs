mod error;
mod record;

#[cfg(test)]
mod tests;

pub use error::{RejectReason, Rejected};
pub use record::Payload;

/// A single vector-bearing data point that can go stale on its own schedule
pub trait PayloadContainer {
    /// Position of this data point
    fn vec(&self) -> &[f32];

    /// Whether this data point should be treated as stale and removed
    fn expired(&self) -> bool;
}

/// Anything that can take ownership of a payload, typically another centroid
pub trait PayloadReceiver<P> {
    /// Representative position, used to score this receiver as a target
    fn vec(&self) -> &[f32];

    /// Accept the payload, or hand it back untouched on rejection
    fn add_payload(&mut self, payload: P) -> Result<(), Rejected<P>>;
}

impl<P, R> PayloadReceiver<P> for &mut R
where
    R: PayloadReceiver<P> + ?Sized,
{
    fn vec(&self) -> &[f32] {
        (**self).vec()
    }

    fn add_payload(&mut self, payload: P) -> Result<(), Rejected<P>> {
        (**self).add_payload(payload)
    }
}
