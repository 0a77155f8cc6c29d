// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON file-per-record shipment store

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use wb_core::{Shipment, ShipmentPage, ShipmentStore, StoreError};

/// Directory-backed store: one pretty-printed JSON file per shipment
/// under `<root>/shipments/<id>.json`.
///
/// Queries rescan the directory, so `find_due` pages reflect writes made
/// earlier in the same cycle; claimed or rescheduled records drop out of
/// later pages.
#[derive(Debug, Clone)]
pub struct JsonShipmentStore {
    root: PathBuf,
}

impl JsonShipmentStore {
    /// Open a store rooted at the given data directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(root.join("shipments"))?;
        Ok(Self { root })
    }

    fn shipment_path(&self, id: &str) -> PathBuf {
        self.root.join("shipments").join(format!("{}.json", id))
    }

    fn load_all(&self) -> Result<Vec<Shipment>, StoreError> {
        let dir = self.root.join("shipments");
        let mut shipments = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                let raw = fs::read_to_string(&path)?;
                shipments.push(serde_json::from_str(&raw)?);
            }
        }
        Ok(shipments)
    }

    fn find_first<F>(&self, pred: F) -> Result<Option<Shipment>, StoreError>
    where
        F: Fn(&Shipment) -> bool,
    {
        Ok(self.load_all()?.into_iter().find(|s| pred(s)))
    }
}

#[async_trait]
impl ShipmentStore for JsonShipmentStore {
    async fn find_due(
        &self,
        now: DateTime<Utc>,
        page: u32,
        page_size: u32,
    ) -> Result<ShipmentPage, StoreError> {
        let mut due: Vec<Shipment> = self
            .load_all()?
            .into_iter()
            .filter(|s| s.is_eligible(now))
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
        let path = self.shipment_path(&shipment.id);
        let json = serde_json::to_string_pretty(shipment)?;
        // Write-then-rename so a crashed write never leaves a torn record
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Shipment>, StoreError> {
        let path = self.shipment_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<Shipment>, StoreError> {
        self.find_first(|s| s.tracking_number.as_deref() == Some(tracking_number))
    }

    async fn find_by_reference(&self, reference: &str) -> Result<Option<Shipment>, StoreError> {
        self.find_first(|s| s.reference.as_deref() == Some(reference))
    }

    async fn list(&self) -> Result<Vec<Shipment>, StoreError> {
        let mut all = self.load_all()?;
        all.sort_by(|a, b| {
            a.creation_date
                .cmp(&b.creation_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(all)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
