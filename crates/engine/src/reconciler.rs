// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reconciliation cycle: select, claim, dispatch, fold, reschedule

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use wb_core::{
    Clock, FailureDisposition, RetryPolicy, Shipment, ShipmentStore, ShippingStatus,
};

use crate::error::CycleError;
use crate::registry::CarrierRegistry;

/// Counters for one reconciliation cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    /// Non-empty store pages fetched
    pub pages: u32,
    /// Shipments pulled from those pages
    pub processed: u32,
    /// Successful event-bearing resolutions
    pub updated: u32,
    /// Processing failures rescheduled for retry
    pub failed: u32,
    /// Shipments parked as UNKNOWN after exhausting retries
    pub abandoned: u32,
    /// Shipments skipped because the claim write failed
    pub skipped: u32,
}

/// Drives periodic status reconciliation against the shipment store.
///
/// One cycle pages through due shipments, claims each record before any
/// carrier call, and folds the result back through the retry policy.
/// Cycles must not overlap: the trigger is expected to await each cycle
/// before starting the next.
pub struct Reconciler<S, C> {
    store: S,
    registry: CarrierRegistry,
    policy: RetryPolicy,
    page_size: u32,
    clock: C,
    stop: Arc<AtomicBool>,
}

impl<S: ShipmentStore, C: Clock> Reconciler<S, C> {
    pub fn new(
        store: S,
        registry: CarrierRegistry,
        policy: RetryPolicy,
        page_size: u32,
        clock: C,
    ) -> Self {
        Self {
            store,
            registry,
            policy,
            page_size,
            clock,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Stop flag handle; setting it ends the running cycle after the
    /// current shipment completes.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Run one reconciliation cycle to completion.
    ///
    /// A store failure during page selection aborts the cycle; the next
    /// trigger re-evaluates eligibility from scratch.
    pub async fn run_cycle(&self) -> Result<CycleStats, CycleError> {
        let mut stats = CycleStats::default();
        let mut page = 0u32;

        tracing::info!("starting shipment status reconciliation cycle");

        loop {
            let now = self.clock.now();
            let batch = self.store.find_due(now, page, self.page_size).await?;
            if batch.is_empty() {
                break;
            }
            stats.pages += 1;

            tracing::debug!(page, count = batch.shipments.len(), "processing shipment batch");

            for shipment in batch.shipments {
                if self.stop.load(Ordering::SeqCst) {
                    tracing::info!("stop requested, ending cycle");
                    self.log_completion(&stats);
                    return Ok(stats);
                }
                self.process_shipment(shipment, &mut stats).await;
            }

            if batch.is_last {
                break;
            }
            page += 1;
        }

        self.log_completion(&stats);
        Ok(stats)
    }

    async fn process_shipment(&self, mut shipment: Shipment, stats: &mut CycleStats) {
        stats.processed += 1;

        // Claim before any carrier call; the persisted flag is the only
        // cross-process exclusion.
        shipment.claim();
        if let Err(e) = self.store.save(&shipment).await {
            // The record may be left marked in-progress until operational
            // correction; see the concurrency notes in the crate docs.
            tracing::warn!(
                shipment_id = %shipment.id,
                error = %e,
                "claim write failed, skipping shipment"
            );
            stats.skipped += 1;
            return;
        }

        match self.fetch_for(&shipment).await {
            Ok(status) => match status.latest_event().cloned() {
                Some(event) => {
                    let now = self.clock.now();
                    shipment.apply_event(&event, now, &self.policy);
                    stats.updated += 1;
                    tracing::info!(
                        shipment_id = %shipment.id,
                        event_type = %event.event_type,
                        "updated shipment status"
                    );
                }
                None => self.record_failure(&mut shipment, "no shipping events found", stats),
            },
            Err(reason) => self.record_failure(&mut shipment, &reason, stats),
        }

        if let Err(e) = self.store.save(&shipment).await {
            tracing::error!(
                shipment_id = %shipment.id,
                error = %e,
                "failed to persist shipment update"
            );
        }
    }

    /// Resolve the carrier and fetch the current status feed.
    ///
    /// Every failure mode collapses to a reason string for the retry
    /// path; nothing propagates past a single shipment.
    async fn fetch_for(&self, shipment: &Shipment) -> Result<ShippingStatus, String> {
        let Some(tracker) = self.registry.resolve(&shipment.carrier_name) else {
            return Err(format!(
                "no tracking integration for carrier: {}",
                shipment.carrier_name
            ));
        };

        let tracking_number = match shipment.tracking_number.as_deref() {
            Some(tn) if !tn.trim().is_empty() => tn,
            _ => {
                return Err(format!("missing tracking number for shipment: {}", shipment.id));
            }
        };

        tracker
            .fetch_status(tracking_number)
            .await
            .map_err(|e| e.to_string())
    }

    fn record_failure(&self, shipment: &mut Shipment, reason: &str, stats: &mut CycleStats) {
        let now = self.clock.now();
        match shipment.apply_failure(now, &self.policy) {
            FailureDisposition::Rescheduled { next_check } => {
                stats.failed += 1;
                tracing::warn!(
                    shipment_id = %shipment.id,
                    reason,
                    retry_count = shipment.retry_count,
                    next_check = %next_check,
                    "processing error, retry scheduled"
                );
            }
            FailureDisposition::Abandoned => {
                stats.abandoned += 1;
                tracing::warn!(
                    shipment_id = %shipment.id,
                    reason,
                    retry_count = shipment.retry_count,
                    "retries exhausted, shipment abandoned"
                );
            }
        }
    }

    fn log_completion(&self, stats: &CycleStats) {
        tracing::info!(
            pages = stats.pages,
            processed = stats.processed,
            updated = stats.updated,
            failed = stats.failed,
            abandoned = stats.abandoned,
            skipped = stats.skipped,
            "completed shipment status reconciliation cycle"
        );
    }
}

#[cfg(test)]
#[path = "reconciler_tests.rs"]
mod tests;
