// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP carrier tracking integration
//!
//! Generic REST client for carrier tracking APIs exposing
//! `GET {base_url}/shipments/{tracking_number}/status`.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use wb_core::{
    CarrierEndpoint, CarrierTracker, EventType, ShippingEvent, ShippingStatus, TrackingError,
};

use crate::traced::TracedCarrierTracker;

/// Tracker backed by a carrier's REST status endpoint
#[derive(Debug, Clone)]
pub struct HttpCarrierTracker {
    carrier_name: String,
    base_url: String,
    token: Option<String>,
}

impl HttpCarrierTracker {
    pub fn new(carrier_name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            carrier_name: carrier_name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a bearer token sent with every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn status_url(&self, tracking_number: &str) -> String {
        format!("{}/shipments/{}/status", self.base_url, tracking_number)
    }
}

#[async_trait]
impl CarrierTracker for HttpCarrierTracker {
    fn carrier_name(&self) -> &str {
        &self.carrier_name
    }

    async fn fetch_status(
        &self,
        tracking_number: &str,
    ) -> Result<ShippingStatus, TrackingError> {
        let url = self.status_url(tracking_number);
        let token = self.token.clone();

        // ureq is blocking; keep it off the scheduler threads
        let body = tokio::task::spawn_blocking(move || fetch_body(&url, token.as_deref()))
            .await
            .map_err(|e| TrackingError::Transport(format!("fetch task failed: {}", e)))??;

        parse_status(&body)
    }
}

fn fetch_body(url: &str, token: Option<&str>) -> Result<String, TrackingError> {
    let mut request = ureq::get(url);
    if let Some(token) = token {
        request = request.header("authorization", format!("Bearer {}", token));
    }

    let mut response = request.call().map_err(|e| match e {
        ureq::Error::StatusCode(status) => TrackingError::Status { status },
        other => TrackingError::Transport(other.to_string()),
    })?;

    response
        .body_mut()
        .read_to_string()
        .map_err(|e| TrackingError::Transport(format!("failed to read response: {}", e)))
}

#[derive(Debug, Deserialize)]
struct StatusDto {
    #[serde(default)]
    tracking_number: Option<String>,
    #[serde(default)]
    events: Vec<EventDto>,
}

#[derive(Debug, Deserialize)]
struct EventDto {
    #[serde(default)]
    label: String,
    event_type: String,
    date: DateTime<Utc>,
}

/// Parse a carrier status payload.
///
/// Unrecognized event types degrade to `UNKNOWN` rather than failing the
/// whole feed.
fn parse_status(body: &str) -> Result<ShippingStatus, TrackingError> {
    let dto: StatusDto =
        serde_json::from_str(body).map_err(|e| TrackingError::Payload(e.to_string()))?;

    let events = dto
        .events
        .into_iter()
        .map(|event| ShippingEvent {
            label: event.label,
            event_type: EventType::from_str(&event.event_type).unwrap_or(EventType::Unknown),
            occurred_at: event.date,
        })
        .collect();

    Ok(ShippingStatus {
        tracking_number: dto.tracking_number.unwrap_or_default(),
        events,
    })
}

/// Build traced HTTP trackers for every configured carrier endpoint
pub fn trackers_from_config(carriers: &[CarrierEndpoint]) -> Vec<Arc<dyn CarrierTracker>> {
    carriers
        .iter()
        .map(|endpoint| {
            let mut tracker = HttpCarrierTracker::new(&endpoint.name, &endpoint.base_url);
            if let Some(token) = &endpoint.token {
                tracker = tracker.with_token(token);
            }
            Arc::new(TracedCarrierTracker::new(tracker)) as Arc<dyn CarrierTracker>
        })
        .collect()
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
