// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::status::ShippingEvent;
use chrono::TimeZone;
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 10, 9, 0, 0).unwrap()
}

fn policy() -> RetryPolicy {
    RetryPolicy::default()
}

fn event(event_type: EventType) -> ShippingEvent {
    ShippingEvent {
        label: event_type.as_str().to_string(),
        event_type,
        occurred_at: now(),
    }
}

#[test]
fn claim_sets_the_processing_flag() {
    let mut shipment = Shipment::new("s-1", "ups", now());
    shipment.claim();
    assert!(shipment.processing_in_progress);
}

#[test]
fn apply_event_resets_retry_streak() {
    let mut shipment = Shipment::new("s-1", "ups", now());
    shipment.retry_count = 2;
    shipment.claim();

    shipment.apply_event(&event(EventType::ShipmentInProgress), now(), &policy());

    assert_eq!(shipment.retry_count, 0);
    assert!(!shipment.processing_in_progress);
    assert_eq!(shipment.last_event_type, EventType::ShipmentInProgress);
    assert_eq!(shipment.last_update_date, now());
}

#[test]
fn non_terminal_event_schedules_next_check_one_delay_out() {
    let mut shipment = Shipment::new("s-1", "ups", now());
    shipment.apply_event(&event(EventType::ShipmentHandled), now(), &policy());
    assert_eq!(
        shipment.next_check_date,
        Some(now() + chrono::Duration::hours(2))
    );
}

#[test]
fn terminal_event_clears_next_check() {
    let mut shipment = Shipment::new("s-1", "ups", now());
    shipment.apply_event(&event(EventType::ShipmentDelivered), now(), &policy());
    assert_eq!(shipment.last_event_type, EventType::ShipmentDelivered);
    assert!(shipment.next_check_date.is_none());
}

#[test]
fn first_failure_waits_one_delay_unit() {
    let mut shipment = Shipment::new("s-1", "ups", now());
    let disposition = shipment.apply_failure(now(), &policy());

    assert_eq!(shipment.retry_count, 1);
    assert!(!shipment.processing_in_progress);
    assert_eq!(
        disposition,
        FailureDisposition::Rescheduled {
            next_check: now() + chrono::Duration::hours(2)
        }
    );
}

#[test]
fn second_failure_waits_two_delay_units() {
    let mut shipment = Shipment::new("s-1", "ups", now());
    shipment.retry_count = 1;
    shipment.apply_failure(now(), &policy());
    assert_eq!(
        shipment.next_check_date,
        Some(now() + chrono::Duration::hours(4))
    );
}

#[test]
fn failure_at_max_retry_abandons_the_shipment() {
    let mut shipment = Shipment::new("s-1", "ups", now());
    shipment.retry_count = 2;
    let disposition = shipment.apply_failure(now(), &policy());

    assert_eq!(disposition, FailureDisposition::Abandoned);
    assert_eq!(shipment.last_event_type, EventType::Unknown);
    assert!(shipment.next_check_date.is_none());
    assert!(!shipment.processing_in_progress);
    assert_eq!(shipment.retry_count, 3);
}

#[test]
fn failure_does_not_touch_last_event_type_before_abandonment() {
    let mut shipment = Shipment::new("s-1", "ups", now());
    shipment.last_event_type = EventType::ShipmentInProgress;
    shipment.apply_failure(now(), &policy());
    assert_eq!(shipment.last_event_type, EventType::ShipmentInProgress);
}

proptest! {
    // Linear backoff: a streak of n consecutive failures waits base_delay * n.
    #[test]
    fn failure_backoff_scales_linearly(prior in 0u32..20, hours in 1u32..24) {
        let policy = RetryPolicy {
            max_retry: 100,
            base_delay: Duration::from_secs(u64::from(hours) * 3600),
        };
        let mut shipment = Shipment::new("s-1", "ups", now());
        shipment.retry_count = prior;

        let disposition = shipment.apply_failure(now(), &policy);

        let expected = now() + chrono::Duration::hours(i64::from(hours) * i64::from(prior + 1));
        prop_assert_eq!(disposition, FailureDisposition::Rescheduled { next_check: expected });
        prop_assert_eq!(shipment.next_check_date, Some(expected));
    }

    // Once the streak reaches max_retry the record is always parked as
    // UNKNOWN with no next check, whatever the policy.
    #[test]
    fn exhausted_retries_always_abandon(max in 1u32..10, extra in 0u32..10) {
        let policy = RetryPolicy { max_retry: max, base_delay: Duration::from_secs(3600) };
        let mut shipment = Shipment::new("s-1", "ups", now());
        shipment.retry_count = max - 1 + extra;

        let disposition = shipment.apply_failure(now(), &policy);

        prop_assert_eq!(disposition, FailureDisposition::Abandoned);
        prop_assert_eq!(shipment.last_event_type, EventType::Unknown);
        prop_assert!(shipment.next_check_date.is_none());
    }

    // Terminal status and a scheduled next check are mutually exclusive
    // after any engine write.
    #[test]
    fn terminal_iff_no_next_check(prior in 0u32..6) {
        let policy = RetryPolicy { max_retry: 3, base_delay: Duration::from_secs(3600) };
        let mut shipment = Shipment::new("s-1", "ups", now());
        shipment.retry_count = prior;

        shipment.apply_failure(now(), &policy);

        prop_assert_eq!(
            shipment.last_event_type.is_terminal(),
            shipment.next_check_date.is_none()
        );
    }
}
