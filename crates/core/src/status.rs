// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Carrier status feed values

use crate::event::EventType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of tracking events for one shipment, as returned by a
/// carrier integration.
///
/// Transient: the reconciler folds it into the persisted shipment record
/// and discards it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShippingStatus {
    pub tracking_number: String,
    #[serde(default)]
    pub events: Vec<ShippingEvent>,
}

/// One timestamped tracking event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingEvent {
    pub label: String,
    pub event_type: EventType,
    pub occurred_at: DateTime<Utc>,
}

impl ShippingStatus {
    pub fn new(tracking_number: impl Into<String>) -> Self {
        Self {
            tracking_number: tracking_number.into(),
            events: Vec::new(),
        }
    }

    pub fn with_event(
        mut self,
        label: impl Into<String>,
        event_type: EventType,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        self.events.push(ShippingEvent {
            label: label.into(),
            event_type,
            occurred_at,
        });
        self
    }

    /// The most recent event in the feed.
    ///
    /// On an exact timestamp tie the later element in input order wins,
    /// so repeated polls of an unchanged feed pick the same event.
    pub fn latest_event(&self) -> Option<&ShippingEvent> {
        self.events.iter().max_by_key(|event| event.occurred_at)
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
