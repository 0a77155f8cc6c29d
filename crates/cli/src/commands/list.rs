// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! List shipments

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use std::path::Path;
use wb_core::{Shipment, ShipmentStore};
use wb_storage::JsonShipmentStore;

use crate::output::{self, OutputFormat, ShipmentView};

#[derive(Args)]
pub struct ListArgs {
    /// Include shipments that are not currently due for a check
    #[arg(long)]
    pub all: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub async fn run(args: ListArgs, data_dir: &Path) -> Result<()> {
    let store = JsonShipmentStore::open(data_dir)?;

    let shipments = if args.all {
        store.list().await?
    } else {
        due_shipments(&store).await?
    };

    let views: Vec<ShipmentView> = shipments.iter().map(ShipmentView::from).collect();
    output::print_list(&views, args.format);
    Ok(())
}

async fn due_shipments(store: &JsonShipmentStore) -> Result<Vec<Shipment>> {
    let now = Utc::now();
    let mut shipments = Vec::new();
    let mut page = 0;
    loop {
        let batch = store.find_due(now, page, 100).await?;
        shipments.extend(batch.shipments);
        if batch.is_last {
            break;
        }
        page += 1;
    }
    Ok(shipments)
}
