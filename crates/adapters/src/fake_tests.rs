// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::{TimeZone, Utc};
use wb_core::EventType;

#[tokio::test]
async fn scripted_status_is_returned() {
    let tracker = FakeCarrierTracker::new("ups");
    let status = ShippingStatus::new("1Z999").with_event(
        "Delivered",
        EventType::ShipmentDelivered,
        Utc.with_ymd_and_hms(2026, 2, 10, 9, 0, 0).unwrap(),
    );
    tracker.respond_with("1Z999", status);

    let fetched = tracker.fetch_status("1Z999").await.unwrap();
    assert_eq!(fetched.events.len(), 1);
    assert_eq!(tracker.calls(), vec!["1Z999"]);
}

#[tokio::test]
async fn scripted_failure_is_a_transport_error() {
    let tracker = FakeCarrierTracker::new("ups");
    tracker.fail_with("1Z999", "connection reset");

    let result = tracker.fetch_status("1Z999").await;
    assert!(matches!(result, Err(TrackingError::Transport(m)) if m == "connection reset"));
}

#[tokio::test]
async fn unscripted_tracking_number_is_not_found() {
    let tracker = FakeCarrierTracker::new("ups");
    let result = tracker.fetch_status("nope").await;
    assert!(matches!(result, Err(TrackingError::Status { status: 404 })));
}

#[tokio::test]
async fn calls_are_recorded_in_order() {
    let tracker = FakeCarrierTracker::new("ups");
    let _ = tracker.fetch_status("a").await;
    let _ = tracker.fetch_status("b").await;
    assert_eq!(tracker.calls(), vec!["a", "b"]);
}
