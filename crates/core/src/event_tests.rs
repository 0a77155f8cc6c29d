// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    ready = { EventType::ShipmentReady, false },
    in_progress = { EventType::ShipmentInProgress, false },
    handled = { EventType::ShipmentHandled, false },
    delivered = { EventType::ShipmentDelivered, true },
    unknown = { EventType::Unknown, true },
)]
fn terminal_classification(event_type: EventType, terminal: bool) {
    assert_eq!(event_type.is_terminal(), terminal);
}

#[test]
fn terminal_set_matches_is_terminal() {
    for event_type in TERMINAL {
        assert!(event_type.is_terminal());
    }
}

#[test]
fn wire_names_round_trip() {
    let all = [
        EventType::ShipmentReady,
        EventType::ShipmentInProgress,
        EventType::ShipmentHandled,
        EventType::ShipmentDelivered,
        EventType::Unknown,
    ];
    for event_type in all {
        assert_eq!(event_type.as_str().parse::<EventType>().unwrap(), event_type);
    }
}

#[test]
fn serde_uses_wire_names() {
    let json = serde_json::to_string(&EventType::ShipmentDelivered).unwrap();
    assert_eq!(json, "\"SHIPMENT_DELIVERED\"");
    let back: EventType = serde_json::from_str(&json).unwrap();
    assert_eq!(back, EventType::ShipmentDelivered);
}

#[test]
fn unrecognized_wire_name_fails_to_parse() {
    assert!("SHIPMENT_TELEPORTED".parse::<EventType>().is_err());
}

#[test]
fn display_matches_wire_name() {
    assert_eq!(EventType::ShipmentInProgress.to_string(), "SHIPMENT_IN_PROGRESS");
}
