// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shipment lifecycle statuses reported by carrier feeds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Status of a shipment as reported by a carrier tracking feed.
///
/// `ShipmentDelivered` and `Unknown` are terminal: once one is recorded
/// the reconciler never schedules another check for that shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    ShipmentReady,
    ShipmentInProgress,
    ShipmentHandled,
    ShipmentDelivered,
    Unknown,
}

/// Terminal statuses, excluded from due-shipment selection
pub const TERMINAL: [EventType; 2] = [EventType::ShipmentDelivered, EventType::Unknown];

impl EventType {
    /// Whether no further automatic checks occur from this status
    pub fn is_terminal(self) -> bool {
        matches!(self, EventType::ShipmentDelivered | EventType::Unknown)
    }

    /// Wire name, as persisted and as reported by carrier feeds
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::ShipmentReady => "SHIPMENT_READY",
            EventType::ShipmentInProgress => "SHIPMENT_IN_PROGRESS",
            EventType::ShipmentHandled => "SHIPMENT_HANDLED",
            EventType::ShipmentDelivered => "SHIPMENT_DELIVERED",
            EventType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown event type: {0}")]
pub struct ParseEventTypeError(String);

impl FromStr for EventType {
    type Err = ParseEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHIPMENT_READY" => Ok(EventType::ShipmentReady),
            "SHIPMENT_IN_PROGRESS" => Ok(EventType::ShipmentInProgress),
            "SHIPMENT_HANDLED" => Ok(EventType::ShipmentHandled),
            "SHIPMENT_DELIVERED" => Ok(EventType::ShipmentDelivered),
            "UNKNOWN" => Ok(EventType::Unknown),
            other => Err(ParseEventTypeError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
