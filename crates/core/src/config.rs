// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Application configuration (wb.toml)

use crate::reconcile::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Reconciliation cycle settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcilerConfig {
    /// Shipments fetched per store page
    pub page_size: u32,
    /// Consecutive failures tolerated before a shipment is abandoned
    pub max_retry: u32,
    /// Delay unit for rescheduling and linear retry backoff
    #[serde(with = "humantime_serde")]
    pub base_delay: Duration,
    /// How often the daemon runs a cycle
    #[serde(with = "humantime_serde")]
    pub cycle_interval: Duration,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            page_size: 100,
            max_retry: 3,
            base_delay: Duration::from_secs(2 * 60 * 60),
            cycle_interval: Duration::from_secs(30 * 60),
        }
    }
}

impl ReconcilerConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retry: self.max_retry,
            base_delay: self.base_delay,
        }
    }
}

/// One configured carrier tracking endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierEndpoint {
    /// Carrier name as stored on shipment records
    pub name: String,
    /// Base URL of the tracking API
    pub base_url: String,
    /// Optional bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub reconciler: ReconcilerConfig,
    pub carriers: Vec<CarrierEndpoint>,
}

impl AppConfig {
    /// Load from a TOML file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
