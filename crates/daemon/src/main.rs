// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Waybill daemon (wbd)
//!
//! Background process that periodically reconciles shipment status
//! against carrier tracking services. Cycles never overlap: each one is
//! awaited to completion before the interval fires again.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod lifecycle;

use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::Notify;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};
use wb_core::AppConfig;

use crate::lifecycle::{Config, LifecycleError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse arguments: wbd [--once] [data_dir]
    let mut once = false;
    let mut data_dir: Option<PathBuf> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--once" => once = true,
            other => data_dir = Some(PathBuf::from(other)),
        }
    }

    let config = Config::resolve(data_dir)?;
    std::fs::create_dir_all(&config.data_dir)?;
    let app = AppConfig::load(&config.config_path)?;

    let _log_guard = setup_logging(&config)?;

    info!(data_dir = %config.data_dir.display(), "starting wbd");

    let daemon = lifecycle::startup(&config, &app)?;

    if once {
        let stats = daemon.reconciler.run_cycle().await?;
        println!(
            "cycle complete: processed={} updated={} failed={} abandoned={}",
            stats.processed, stats.updated, stats.failed, stats.abandoned
        );
        return Ok(());
    }

    // Signals stop the running cycle after the current shipment, then
    // wake the main loop if it was idle
    let stop = daemon.reconciler.stop_handle();
    let shutdown = Arc::new(Notify::new());
    {
        let stop = Arc::clone(&stop);
        let shutdown = Arc::clone(&shutdown);
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::spawn(async move {
            tokio::select! {
                _ = sigterm.recv() => info!("received SIGTERM, shutting down..."),
                _ = sigint.recv() => info!("received SIGINT, shutting down..."),
            }
            stop.store(true, Ordering::SeqCst);
            shutdown.notify_one();
        });
    }

    let mut interval = tokio::time::interval(app.reconciler.cycle_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        interval_secs = app.reconciler.cycle_interval.as_secs(),
        "daemon ready"
    );

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match daemon.reconciler.run_cycle().await {
                    Ok(stats) => info!(
                        processed = stats.processed,
                        updated = stats.updated,
                        failed = stats.failed,
                        abandoned = stats.abandoned,
                        "cycle complete"
                    ),
                    Err(e) => error!(error = %e, "cycle aborted"),
                }
                if stop.load(Ordering::SeqCst) {
                    break;
                }
            }
            _ = shutdown.notified() => break,
        }
    }

    info!("daemon stopped");
    Ok(())
}

fn setup_logging(
    config: &Config,
) -> Result<tracing_appender::non_blocking::WorkerGuard, LifecycleError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Create log directory if needed
    if let Some(parent) = config.log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = tracing_appender::rolling::never(
        config.log_path.parent().ok_or(LifecycleError::NoDataDir)?,
        config
            .log_path
            .file_name()
            .ok_or(LifecycleError::NoDataDir)?,
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    Ok(guard)
}
