// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shipment store contract

use crate::shipment::Shipment;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors from shipment store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// One page of due shipments
#[derive(Debug, Clone)]
pub struct ShipmentPage {
    pub shipments: Vec<Shipment>,
    pub is_last: bool,
}

impl ShipmentPage {
    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }
}

/// Persistent repository of shipment records.
///
/// `find_due` pages are ordered by `(next_check_date, id)` and computed
/// against current store contents; writes from earlier pages of a cycle
/// are visible to later queries, so records mutated out of eligibility
/// drop from subsequent pages.
#[async_trait]
pub trait ShipmentStore: Send + Sync {
    /// Page of records eligible for a status check: unclaimed, due at
    /// `now`, and not in a terminal status.
    async fn find_due(
        &self,
        now: DateTime<Utc>,
        page: u32,
        page_size: u32,
    ) -> Result<ShipmentPage, StoreError>;

    /// Upsert a record by id
    async fn save(&self, shipment: &Shipment) -> Result<(), StoreError>;

    async fn get(&self, id: &str) -> Result<Option<Shipment>, StoreError>;

    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<Shipment>, StoreError>;

    async fn find_by_reference(&self, reference: &str) -> Result<Option<Shipment>, StoreError>;

    /// Every record in the store, ordered by creation date
    async fn list(&self) -> Result<Vec<Shipment>, StoreError>;
}
