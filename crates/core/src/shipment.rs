// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shipment record and address/parcel value objects

use crate::event::EventType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted shipment record.
///
/// Created once by the intake workflow and mutated exclusively by the
/// reconciliation engine afterwards. `processing_in_progress` is the
/// claim flag: true exactly while one cycle owns the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub carrier_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_address: Option<Address>,
    #[serde(default)]
    pub parcels: Vec<Parcel>,
    pub last_event_type: EventType,
    #[serde(default)]
    pub processing_in_progress: bool,
    #[serde(default)]
    pub retry_count: u32,
    pub creation_date: DateTime<Utc>,
    pub last_update_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_check_date: Option<DateTime<Utc>>,
}

impl Shipment {
    /// Create a record ready for its first status check
    pub fn new(
        id: impl Into<String>,
        carrier_name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            reference: None,
            carrier_name: carrier_name.into(),
            carrier_service: None,
            tracking_number: None,
            from_address: None,
            to_address: None,
            parcels: Vec::new(),
            last_event_type: EventType::ShipmentReady,
            processing_in_progress: false,
            retry_count: 0,
            creation_date: now,
            last_update_date: now,
            next_check_date: Some(now),
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_tracking_number(mut self, tracking_number: impl Into<String>) -> Self {
        self.tracking_number = Some(tracking_number.into());
        self
    }

    pub fn with_carrier_service(mut self, service: impl Into<String>) -> Self {
        self.carrier_service = Some(service.into());
        self
    }

    pub fn with_addresses(mut self, from: Address, to: Address) -> Self {
        self.from_address = Some(from);
        self.to_address = Some(to);
        self
    }

    pub fn with_parcel(mut self, parcel: Parcel) -> Self {
        self.parcels.push(parcel);
        self
    }

    /// Whether this record may be selected for a status check:
    /// unclaimed, due, and not in a terminal status.
    pub fn is_eligible(&self, now: DateTime<Utc>) -> bool {
        !self.processing_in_progress
            && !self.last_event_type.is_terminal()
            && self.next_check_date.is_some_and(|due| due <= now)
    }

    /// Cross-border shipment
    pub fn is_international(&self) -> bool {
        match (&self.from_address, &self.to_address) {
            (Some(from), Some(to)) => !from.country.eq_ignore_ascii_case(&to.country),
            _ => false,
        }
    }
}

/// Postal address (origin or destination)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub street1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    pub city: String,
    pub zip: String,
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
}

/// Physical parcel; dimensions in centimetres, weight per `unit_weight`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parcel {
    pub length: f32,
    pub width: f32,
    pub height: f32,
    pub weight: f32,
    pub unit_weight: String,
}

impl Default for Parcel {
    fn default() -> Self {
        Self {
            length: 30.0,
            width: 30.0,
            height: 30.0,
            weight: 1.0,
            unit_weight: "KGM".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "shipment_tests.rs"]
mod tests;
