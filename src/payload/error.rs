use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    #[error("Vector length {actual} does not match expected length {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Payload has expired")]
    Expired,

    /// Receiver declined for its own reasons (capacity, policy)
    #[error("Receiver refused payload")]
    Refused,
}

/// A refused payload, returned to the caller together with the reason
#[derive(Debug)]
pub struct Rejected<P> {
    pub reason: RejectReason,
    pub payload: P,
}

impl<P> Rejected<P> {
    pub fn new(reason: RejectReason, payload: P) -> Self {
        Self { reason, payload }
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P> fmt::Display for Rejected<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payload rejected: {}", self.reason)
    }
}

impl<P: fmt::Debug> std::error::Error for Rejected<P> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}
