// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory shipment store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use wb_core::{Shipment, ShipmentPage, ShipmentStore, StoreError};

/// In-memory store with failure injection and save recording, for
/// exercising the engine without a filesystem.
#[derive(Clone, Default)]
pub struct MemoryShipmentStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    shipments: BTreeMap<String, Shipment>,
    saves: Vec<Shipment>,
    save_attempts: usize,
    fail_next_save: bool,
    fail_save_at: HashSet<usize>,
    fail_find_due: bool,
}

impl MemoryShipmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record directly, bypassing save recording
    pub fn insert(&self, shipment: Shipment) {
        self.lock().shipments.insert(shipment.id.clone(), shipment);
    }

    /// Current state of a record, without going through the trait
    pub fn get_sync(&self, id: &str) -> Option<Shipment> {
        self.lock().shipments.get(id).cloned()
    }

    /// Snapshots passed to `save`, in call order
    pub fn saves(&self) -> Vec<Shipment> {
        self.lock().saves.clone()
    }

    /// Make the next `save` call fail
    pub fn fail_next_save(&self) {
        self.lock().fail_next_save = true;
    }

    /// Make the save attempt at the given 0-based index fail, counting
    /// every attempt since store creation
    pub fn fail_save_at(&self, index: usize) {
        self.lock().fail_save_at.insert(index);
    }

    /// Make every `find_due` call fail
    pub fn fail_find_due(&self) {
        self.lock().fail_find_due = true;
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ShipmentStore for MemoryShipmentStore {
    async fn find_due(
        &self,
        now: DateTime<Utc>,
        page: u32,
        page_size: u32,
    ) -> Result<ShipmentPage, StoreError> {
        let inner = self.lock();
        if inner.fail_find_due {
            return Err(StoreError::Unavailable("injected find_due failure".into()));
        }

        let mut due: Vec<Shipment> = inner
            .shipments
            .values()
            .filter(|s| s.is_eligible(now))
            .cloned()
            .collect();
        due.sort_by(|a, b| {
            a.next_check_date
                .cmp(&b.next_check_date)
                .then_with(|| a.id.cmp(&b.id))
        });

        let size = page_size as usize;
        let start = (page as usize).saturating_mul(size);
        let is_last = start + size >= due.len();
        let shipments = due.into_iter().skip(start).take(size).collect();
        Ok(ShipmentPage { shipments, is_last })
    }

    async fn save(&self, shipment: &Shipment) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let attempt = inner.save_attempts;
        inner.save_attempts += 1;
        if inner.fail_next_save {
            inner.fail_next_save = false;
            return Err(StoreError::Unavailable("injected save failure".into()));
        }
        if inner.fail_save_at.contains(&attempt) {
            return Err(StoreError::Unavailable("injected save failure".into()));
        }
        inner.saves.push(shipment.clone());
        inner
            .shipments
            .insert(shipment.id.clone(), shipment.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Shipment>, StoreError> {
        Ok(self.lock().shipments.get(id).cloned())
    }

    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<Shipment>, StoreError> {
        Ok(self
            .lock()
            .shipments
            .values()
            .find(|s| s.tracking_number.as_deref() == Some(tracking_number))
            .cloned())
    }

    async fn find_by_reference(&self, reference: &str) -> Result<Option<Shipment>, StoreError> {
        Ok(self
            .lock()
            .shipments
            .values()
            .find(|s| s.reference.as_deref() == Some(reference))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Shipment>, StoreError> {
        let mut all: Vec<Shipment> = self.lock().shipments.values().cloned().collect();
        all.sort_by(|a, b| {
            a.creation_date
                .cmp(&b.creation_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(all)
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
