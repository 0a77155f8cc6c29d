// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Show one shipment

use anyhow::Result;
use clap::Args;
use std::path::Path;
use wb_core::{Shipment, ShipmentStore};
use wb_storage::JsonShipmentStore;

use crate::output::{self, OutputFormat, ShipmentView};

#[derive(Args)]
pub struct ShowArgs {
    /// Shipment id, reference, or tracking number
    pub key: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub async fn run(args: ShowArgs, data_dir: &Path) -> Result<()> {
    let store = JsonShipmentStore::open(data_dir)?;

    let shipment = lookup(&store, &args.key)
        .await?
        .ok_or_else(|| anyhow::anyhow!("shipment not found: {}", args.key))?;

    output::print(&ShipmentView::from(&shipment), args.format);
    Ok(())
}

/// Try id first, then reference, then tracking number
async fn lookup(store: &JsonShipmentStore, key: &str) -> Result<Option<Shipment>> {
    if let Some(shipment) = store.get(key).await? {
        return Ok(Some(shipment));
    }
    if let Some(shipment) = store.find_by_reference(key).await? {
        return Ok(Some(shipment));
    }
    Ok(store.find_by_tracking_number(key).await?)
}
