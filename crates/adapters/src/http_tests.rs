// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn status_url_joins_base_and_tracking_number() {
    let tracker = HttpCarrierTracker::new("ups", "https://api.example.test/ups");
    assert_eq!(
        tracker.status_url("1Z999"),
        "https://api.example.test/ups/shipments/1Z999/status"
    );
}

#[test]
fn trailing_slash_in_base_url_is_trimmed() {
    let tracker = HttpCarrierTracker::new("ups", "https://api.example.test/ups/");
    assert_eq!(
        tracker.status_url("1Z999"),
        "https://api.example.test/ups/shipments/1Z999/status"
    );
}

#[test]
fn parse_status_maps_events() {
    let body = r#"{
        "tracking_number": "1Z999",
        "events": [
            {"label": "Picked up", "event_type": "SHIPMENT_IN_PROGRESS", "date": "2026-02-10T09:00:00Z"},
            {"label": "Delivered", "event_type": "SHIPMENT_DELIVERED", "date": "2026-02-11T14:30:00Z"}
        ]
    }"#;

    let status = parse_status(body).unwrap();
    assert_eq!(status.tracking_number, "1Z999");
    assert_eq!(status.events.len(), 2);
    assert_eq!(status.events[1].event_type, EventType::ShipmentDelivered);
    assert_eq!(
        status.latest_event().unwrap().event_type,
        EventType::ShipmentDelivered
    );
}

#[test]
fn unrecognized_event_type_degrades_to_unknown() {
    let body = r#"{
        "tracking_number": "1Z999",
        "events": [
            {"label": "Teleported", "event_type": "SHIPMENT_TELEPORTED", "date": "2026-02-10T09:00:00Z"}
        ]
    }"#;

    let status = parse_status(body).unwrap();
    assert_eq!(status.events[0].event_type, EventType::Unknown);
}

#[test]
fn missing_events_parse_as_empty_feed() {
    let status = parse_status(r#"{"tracking_number": "1Z999"}"#).unwrap();
    assert!(status.events.is_empty());
    assert!(status.latest_event().is_none());
}

#[test]
fn malformed_payload_is_a_payload_error() {
    let result = parse_status("not json at all");
    assert!(matches!(result, Err(TrackingError::Payload(_))));
}

#[test]
fn trackers_from_config_builds_one_per_endpoint() {
    let carriers = vec![
        CarrierEndpoint {
            name: "colissimo".into(),
            base_url: "https://api.example.test/colissimo".into(),
            token: Some("sekret".into()),
        },
        CarrierEndpoint {
            name: "ups".into(),
            base_url: "https://api.example.test/ups".into(),
            token: None,
        },
    ];

    let trackers = trackers_from_config(&carriers);
    assert_eq!(trackers.len(), 2);
    assert_eq!(trackers[0].carrier_name(), "colissimo");
    assert_eq!(trackers[1].carrier_name(), "ups");
}
