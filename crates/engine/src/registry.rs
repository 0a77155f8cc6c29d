// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Carrier integration lookup

use std::sync::Arc;
use wb_core::CarrierTracker;

/// Registry of carrier tracking integrations, built once at startup.
///
/// Resolution is a linear scan over a handful of integrations; names
/// match case-insensitively and the first registration wins.
#[derive(Clone, Default)]
pub struct CarrierRegistry {
    trackers: Vec<Arc<dyn CarrierTracker>>,
}

impl CarrierRegistry {
    pub fn new(trackers: Vec<Arc<dyn CarrierTracker>>) -> Self {
        for (i, tracker) in trackers.iter().enumerate() {
            let duplicate = trackers[..i]
                .iter()
                .any(|t| t.carrier_name().eq_ignore_ascii_case(tracker.carrier_name()));
            if duplicate {
                tracing::warn!(
                    carrier = tracker.carrier_name(),
                    "duplicate carrier registration; first match wins"
                );
            }
        }
        Self { trackers }
    }

    /// Look up the integration for a carrier name
    pub fn resolve(&self, carrier_name: &str) -> Option<Arc<dyn CarrierTracker>> {
        if carrier_name.trim().is_empty() {
            return None;
        }
        self.trackers
            .iter()
            .find(|t| t.carrier_name().eq_ignore_ascii_case(carrier_name))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
