// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Carrier integration capability

use crate::status::ShippingStatus;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from a carrier tracking integration
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("carrier returned HTTP {status}")]
    Status { status: u16 },
    #[error("invalid status payload: {0}")]
    Payload(String),
}

/// A carrier integration able to fetch current tracking status.
///
/// Implementations are registered once at process start and immutable
/// for the process lifetime.
#[async_trait]
pub trait CarrierTracker: Send + Sync {
    /// Carrier name handled by this integration (matched case-insensitively)
    fn carrier_name(&self) -> &str;

    /// Fetch the current status feed for a tracking number
    async fn fetch_status(&self, tracking_number: &str)
        -> Result<ShippingStatus, TrackingError>;
}
