use super::PayloadContainer;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// General-purpose payload: a vector, opaque JSON data and an optional deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub id: Uuid,
    pub vec: Vec<f32>,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Payload {
    /// Create a payload that never expires
    pub fn new(vec: Vec<f32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            vec,
            data: serde_json::Value::Null,
            expires_at: None,
        }
    }

    /// Attach opaque application data
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    /// Expire at a fixed point in time
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.expires_at = Some(deadline);
        self
    }

    /// Expire `ttl` from now
    pub fn with_ttl(self, ttl: Duration) -> Self {
        self.with_deadline(Utc::now() + ttl)
    }

    /// Expiry check against an explicit clock reading
    pub fn expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|deadline| deadline <= now)
    }
}

impl PayloadContainer for Payload {
    fn vec(&self) -> &[f32] {
        &self.vec
    }

    fn expired(&self) -> bool {
        self.expired_at(Utc::now())
    }
}
