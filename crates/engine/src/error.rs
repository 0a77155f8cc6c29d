// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the reconciliation engine

use thiserror::Error;
use wb_core::StoreError;

/// Errors that abort a reconciliation cycle.
///
/// Per-shipment failures never surface here; they are folded into the
/// shipment record via the retry path.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
