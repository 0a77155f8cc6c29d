// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use wb_core::Shipment;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Flattened, display-oriented view of a shipment record
#[derive(Debug, Serialize)]
pub struct ShipmentView {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub carrier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    pub status: String,
    pub retry_count: u32,
    pub processing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_check: Option<String>,
    pub international: bool,
}

impl From<&Shipment> for ShipmentView {
    fn from(shipment: &Shipment) -> Self {
        Self {
            id: shipment.id.clone(),
            reference: shipment.reference.clone(),
            carrier: shipment.carrier_name.clone(),
            tracking_number: shipment.tracking_number.clone(),
            status: shipment.last_event_type.to_string(),
            retry_count: shipment.retry_count,
            processing: shipment.processing_in_progress,
            next_check: shipment.next_check_date.map(|d| d.to_rfc3339()),
            international: shipment.is_international(),
        }
    }
}

impl fmt::Display for ShipmentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:<20}  {:<16}  retries={}",
            self.id,
            self.status,
            self.tracking_number.as_deref().unwrap_or("-"),
            self.retry_count
        )?;
        if let Some(next) = &self.next_check {
            write!(f, "  next={}", next)?;
        }
        if let Some(reference) = &self.reference {
            write!(f, "  ref={}", reference)?;
        }
        Ok(())
    }
}

/// Print a value in the selected format
pub fn print<T: Serialize + fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// Print a list of values in the selected format
pub fn print_list<T: Serialize + fmt::Display>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for item in items {
                println!("{}", item);
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(items) {
                println!("{}", json);
            }
        }
    }
}
