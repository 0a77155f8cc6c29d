// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure reconciliation transitions: claim, status fold, retry backoff
//!
//! Every state change the engine makes to a shipment record is computed
//! here, so the transitions stay testable without a store or a carrier
//! integration.

use crate::event::EventType;
use crate::shipment::Shipment;
use crate::status::ShippingEvent;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Retry and scheduling policy for status checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Consecutive failures tolerated before a shipment is abandoned
    pub max_retry: u32,
    /// Delay unit between checks; a failure streak of `n` waits `base_delay * n`
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retry: 3,
            base_delay: Duration::from_secs(2 * 60 * 60),
        }
    }
}

/// What happened to a shipment on the failure path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureDisposition {
    /// Another check is scheduled at the given time
    Rescheduled { next_check: DateTime<Utc> },
    /// Retries exhausted; the shipment is parked as `UNKNOWN`
    Abandoned,
}

impl Shipment {
    /// Mark this record as owned by the current cycle.
    ///
    /// Must be persisted before any carrier call; the stored flag is the
    /// only cross-process exclusion.
    pub fn claim(&mut self) {
        self.processing_in_progress = true;
    }

    /// Fold a successful status resolution into the record.
    ///
    /// Resets the failure streak. A terminal event parks the record;
    /// anything else schedules the next check one delay unit out.
    pub fn apply_event(&mut self, event: &ShippingEvent, now: DateTime<Utc>, policy: &RetryPolicy) {
        self.last_event_type = event.event_type;
        self.retry_count = 0;
        self.processing_in_progress = false;
        self.last_update_date = now;
        self.next_check_date = if event.event_type.is_terminal() {
            None
        } else {
            Some(add_delay(now, policy.base_delay))
        };
    }

    /// Record a processing failure.
    ///
    /// The delay before the next check grows linearly with the failure
    /// streak: `base_delay * retry_count`. Once the streak reaches
    /// `max_retry` the record is parked as `UNKNOWN`.
    pub fn apply_failure(&mut self, now: DateTime<Utc>, policy: &RetryPolicy) -> FailureDisposition {
        self.retry_count += 1;
        self.processing_in_progress = false;
        self.last_update_date = now;

        if self.retry_count >= policy.max_retry {
            self.last_event_type = EventType::Unknown;
            self.next_check_date = None;
            FailureDisposition::Abandoned
        } else {
            let next = add_delay(now, policy.base_delay.saturating_mul(self.retry_count));
            self.next_check_date = Some(next);
            FailureDisposition::Rescheduled { next_check: next }
        }
    }
}

/// Saturating wall-clock addition; far future rather than overflow
fn add_delay(now: DateTime<Utc>, delay: Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(delay)
        .ok()
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
