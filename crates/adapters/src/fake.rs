// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake carrier tracker for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use wb_core::{CarrierTracker, ShippingStatus, TrackingError};

/// Fake tracker with scripted responses per tracking number and call
/// recording.
///
/// Unscripted tracking numbers answer with HTTP 404.
#[derive(Clone)]
pub struct FakeCarrierTracker {
    carrier_name: String,
    responses: Arc<Mutex<HashMap<String, Result<ShippingStatus, String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeCarrierTracker {
    pub fn new(carrier_name: impl Into<String>) -> Self {
        Self {
            carrier_name: carrier_name.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script a successful status response for a tracking number
    pub fn respond_with(&self, tracking_number: &str, status: ShippingStatus) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(tracking_number.to_string(), Ok(status));
    }

    /// Script a transport failure for a tracking number
    pub fn fail_with(&self, tracking_number: &str, message: &str) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(tracking_number.to_string(), Err(message.to_string()));
    }

    /// Tracking numbers fetched, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl CarrierTracker for FakeCarrierTracker {
    fn carrier_name(&self) -> &str {
        &self.carrier_name
    }

    async fn fetch_status(
        &self,
        tracking_number: &str,
    ) -> Result<ShippingStatus, TrackingError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(tracking_number.to_string());

        match self
            .responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(tracking_number)
        {
            Some(Ok(status)) => Ok(status.clone()),
            Some(Err(message)) => Err(TrackingError::Transport(message.clone())),
            None => Err(TrackingError::Status { status: 404 }),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
