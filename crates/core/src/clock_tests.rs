// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;

#[test]
fn system_clock_advances() {
    let clock = SystemClock;
    let a = clock.now();
    let b = clock.now();
    assert!(b >= a);
}

#[test]
fn fake_clock_is_frozen_until_advanced() {
    let clock = FakeClock::new();
    let a = clock.now();
    let b = clock.now();
    assert_eq!(a, b);
}

#[test]
fn fake_clock_advance_moves_time_forward() {
    let clock = FakeClock::new();
    let before = clock.now();
    clock.advance(Duration::hours(2));
    assert_eq!(clock.now(), before + Duration::hours(2));
}

#[test]
fn fake_clock_set_pins_time() {
    let clock = FakeClock::new();
    let target = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    clock.set(target);
    assert_eq!(clock.now(), target);
}

#[test]
fn fake_clock_clones_share_time() {
    let clock = FakeClock::new();
    let other = clock.clone();
    clock.advance(Duration::minutes(30));
    assert_eq!(clock.now(), other.now());
}

#[test]
fn fake_clock_at_starts_from_given_instant() {
    let start = Utc.with_ymd_and_hms(2026, 1, 15, 8, 30, 0).unwrap();
    let clock = FakeClock::at(start);
    assert_eq!(clock.now(), start);
}
