// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle: filesystem layout, locking, reconciler startup

use std::fs::File;
use std::path::PathBuf;

use fs2::FileExt;
use thiserror::Error;
use wb_core::{AppConfig, SystemClock};
use wb_engine::{CarrierRegistry, Reconciler};
use wb_storage::JsonShipmentStore;

/// Reconciler with the daemon's concrete store and clock
pub type DaemonReconciler = Reconciler<JsonShipmentStore, SystemClock>;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("no usable data directory; pass one explicitly")]
    NoDataDir,
    #[error("another wbd instance holds the lock at {0}")]
    AlreadyRunning(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store error: {0}")]
    Store(#[from] wb_core::StoreError),
}

/// Filesystem layout for one daemon instance
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub lock_path: PathBuf,
    pub log_path: PathBuf,
}

impl Config {
    /// Resolve the layout from an explicit data dir or the platform default
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self, LifecycleError> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => dirs::data_local_dir()
                .ok_or(LifecycleError::NoDataDir)?
                .join("waybill"),
        };
        Ok(Self {
            config_path: data_dir.join("wb.toml"),
            lock_path: data_dir.join("wbd.lock"),
            log_path: data_dir.join("wbd.log"),
            data_dir,
        })
    }
}

/// Running daemon state
pub struct Daemon {
    pub reconciler: DaemonReconciler,
    // NOTE(lifetime): held to maintain the exclusive lock; released on drop
    #[allow(dead_code)]
    lock_file: File,
}

/// Acquire the instance lock, open the store, and build the reconciler
pub fn startup(config: &Config, app: &AppConfig) -> Result<Daemon, LifecycleError> {
    std::fs::create_dir_all(&config.data_dir)?;

    let lock_file = File::create(&config.lock_path)?;
    lock_file
        .try_lock_exclusive()
        .map_err(|_| LifecycleError::AlreadyRunning(config.lock_path.clone()))?;

    let store = JsonShipmentStore::open(&config.data_dir)?;
    let registry = CarrierRegistry::new(wb_adapters::trackers_from_config(&app.carriers));

    if registry.is_empty() {
        tracing::warn!("no carriers configured; every due shipment will take the retry path");
    }

    let reconciler = Reconciler::new(
        store,
        registry,
        app.reconciler.retry_policy(),
        app.reconciler.page_size,
        SystemClock,
    );

    Ok(Daemon {
        reconciler,
        lock_file,
    })
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
