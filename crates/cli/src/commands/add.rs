// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Register a shipment for tracking

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use std::path::Path;
use wb_core::{Shipment, ShipmentStore};
use wb_storage::JsonShipmentStore;

#[derive(Args)]
pub struct AddArgs {
    /// Carrier handling the shipment
    #[arg(long)]
    pub carrier: String,

    /// Carrier tracking number, once known
    #[arg(long)]
    pub tracking_number: Option<String>,

    /// Operator-facing reference
    #[arg(long)]
    pub reference: Option<String>,

    /// Carrier service level
    #[arg(long)]
    pub service: Option<String>,
}

pub async fn run(args: AddArgs, data_dir: &Path) -> Result<()> {
    let store = JsonShipmentStore::open(data_dir)?;

    let mut shipment = Shipment::new(uuid::Uuid::new_v4().to_string(), args.carrier, Utc::now());
    if let Some(tracking_number) = args.tracking_number {
        shipment = shipment.with_tracking_number(tracking_number);
    }
    if let Some(reference) = args.reference {
        shipment = shipment.with_reference(reference);
    }
    if let Some(service) = args.service {
        shipment = shipment.with_carrier_service(service);
    }

    store.save(&shipment).await?;
    println!("Added shipment {}", shipment.id);
    Ok(())
}
