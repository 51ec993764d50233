use super::*;
use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

#[test]
fn test_payload_new_never_expires() {
    let p = Payload::new(vec![1.0, 2.0]);
    assert_eq!(p.vec(), &[1.0, 2.0]);
    assert!(!p.expired());
    assert!(p.expires_at.is_none());
}

#[test]
fn test_payload_ids_unique() {
    let a = Payload::new(vec![0.0]);
    let b = Payload::new(vec![0.0]);
    assert_ne!(a.id, b.id);
}

#[test]
fn test_payload_past_deadline() {
    let p = Payload::new(vec![0.0]).with_deadline(Utc::now() - Duration::seconds(5));
    assert!(p.expired());
}

#[test]
fn test_payload_future_ttl() {
    let p = Payload::new(vec![0.0]).with_ttl(Duration::hours(1));
    assert!(!p.expired());
}

#[test]
fn test_payload_expired_at_boundary() {
    let deadline = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let p = Payload::new(vec![0.0]).with_deadline(deadline);

    assert!(!p.expired_at(deadline - Duration::seconds(1)));
    assert!(p.expired_at(deadline));
    assert!(p.expired_at(deadline + Duration::seconds(1)));
}

#[test]
fn test_payload_json_shape() {
    let p = Payload::new(vec![0.5, 1.5]).with_data(json!({"chunk": 42}));
    let value = serde_json::to_value(&p).unwrap();

    assert_eq!(value["vec"], json!([0.5, 1.5]));
    assert_eq!(value["data"]["chunk"], 42);
    // No deadline, no field
    assert!(value.get("expires_at").is_none());

    let back: Payload = serde_json::from_value(value).unwrap();
    assert_eq!(back, p);
}

#[test]
fn test_payload_deserialize_minimal() {
    let raw = r#"{"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","vec":[1.0]}"#;
    let p: Payload = serde_json::from_str(raw).unwrap();
    assert_eq!(p.data, serde_json::Value::Null);
    assert!(!p.expired());
}

#[test]
fn test_rejected_display_and_source() {
    use std::error::Error;

    let r = Rejected::new(
        RejectReason::DimensionMismatch {
            expected: 3,
            actual: 2,
        },
        Payload::new(vec![0.0, 0.0]),
    );
    assert_eq!(
        r.to_string(),
        "Payload rejected: Vector length 2 does not match expected length 3"
    );
    assert!(r.source().is_some());
    assert_eq!(r.into_payload().vec.len(), 2);
}
