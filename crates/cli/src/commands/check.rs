// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run one reconciliation cycle in-process

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use wb_core::{AppConfig, SystemClock};
use wb_engine::{CarrierRegistry, Reconciler};
use wb_storage::JsonShipmentStore;

#[derive(Args)]
pub struct CheckArgs {
    /// Config file (defaults to <data-dir>/wb.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub async fn run(args: CheckArgs, data_dir: &Path) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = args.config.unwrap_or_else(|| data_dir.join("wb.toml"));
    let app = AppConfig::load(&config_path)?;

    let store = JsonShipmentStore::open(data_dir)?;
    let registry = CarrierRegistry::new(wb_adapters::trackers_from_config(&app.carriers));

    let reconciler = Reconciler::new(
        store,
        registry,
        app.reconciler.retry_policy(),
        app.reconciler.page_size,
        SystemClock,
    );

    let stats = reconciler.run_cycle().await?;
    println!(
        "cycle complete: processed={} updated={} failed={} abandoned={}",
        stats.processed, stats.updated, stats.failed, stats.abandoned
    );
    Ok(())
}
