// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced tracker wrapper for consistent observability

use async_trait::async_trait;
use tracing::Instrument;
use wb_core::{CarrierTracker, ShippingStatus, TrackingError};

/// Wrapper that adds tracing to any CarrierTracker
#[derive(Clone)]
pub struct TracedCarrierTracker<T> {
    inner: T,
}

impl<T> TracedCarrierTracker<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: CarrierTracker> CarrierTracker for TracedCarrierTracker<T> {
    fn carrier_name(&self) -> &str {
        self.inner.carrier_name()
    }

    async fn fetch_status(
        &self,
        tracking_number: &str,
    ) -> Result<ShippingStatus, TrackingError> {
        let span = tracing::info_span!(
            "carrier.fetch_status",
            carrier = self.inner.carrier_name(),
            tracking_number
        );

        let start = std::time::Instant::now();
        let result = self
            .inner
            .fetch_status(tracking_number)
            .instrument(span)
            .await;
        let elapsed = start.elapsed();

        match &result {
            Ok(status) => tracing::info!(
                carrier = self.inner.carrier_name(),
                tracking_number,
                events = status.events.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "status fetched"
            ),
            Err(e) => tracing::warn!(
                carrier = self.inner.carrier_name(),
                tracking_number,
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "fetch failed"
            ),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
