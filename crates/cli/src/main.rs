// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! wb - Waybill operator CLI
//!
//! Works directly against the shipment store shared with the daemon.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{add, check, list, show};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wb",
    version,
    about = "Waybill - shipment tracking reconciliation"
)]
struct Cli {
    /// Data directory shared with the daemon
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a shipment for tracking
    Add(add::AddArgs),
    /// List shipments
    List(list::ListArgs),
    /// Show one shipment by id, reference, or tracking number
    Show(show::ShowArgs),
    /// Run one reconciliation cycle now
    Check(check::CheckArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir)?;

    match cli.command {
        Commands::Add(args) => add::run(args, &data_dir).await,
        Commands::List(args) => list::run(args, &data_dir).await,
        Commands::Show(args) => show::run(args, &data_dir).await,
        Commands::Check(args) => check::run(args, &data_dir).await,
    }
}

fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    match data_dir {
        Some(dir) => Ok(dir),
        None => dirs::data_local_dir()
            .map(|dir| dir.join("waybill"))
            .ok_or_else(|| anyhow::anyhow!("no data directory available; pass --data-dir")),
    }
}
