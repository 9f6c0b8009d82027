//! Headless mode - JSON quote output without the TUI
//!
//! Computes one quote from the configured (or overridden) inputs and writes
//! it to stdout as a single JSON object, so scripts can price a covering
//! without parsing terminal output.
//!
//! # Example Output
//!
//! ```json
//! {"event":"quote","width":30.0,"length":20.0,"area":600.0,"material":{"key":"policarbonato-alveolar","name":"Policarbonato Alveolar","unit_price":120.0},"budget":{"material_subtotal":72000.0,"installation_subtotal":21000.0,"total":93000.0,"financed_total":104160.0},"quote_id":"COT-482913","issued_on":"2024-03-10","valid_until":"2024-04-09"}
//! ```

pub mod runner;

pub use runner::run_headless;

use chrono::NaiveDate;
use coberturas_app::Coverage;
use coberturas_core::prelude::*;
use coberturas_core::{Budget, MaterialType, QuoteStamp};
use serde::Serialize;
use std::io::{self, Write};

/// Material as reported in a quote
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MaterialInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub unit_price: f64,
}

impl From<MaterialType> for MaterialInfo {
    fn from(material: MaterialType) -> Self {
        Self {
            key: material.key(),
            name: material.display_name(),
            unit_price: material.unit_price(),
        }
    }
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Priced quote for the requested covering
    Quote {
        width: f64,
        length: f64,
        area: f64,
        material: MaterialInfo,
        budget: Budget,
        quote_id: String,
        issued_on: NaiveDate,
        valid_until: NaiveDate,
    },

    /// Error occurred
    Error { message: String, fatal: bool },
}

impl HeadlessEvent {
    pub fn quote(coverage: &Coverage, stamp: QuoteStamp) -> Self {
        Self::Quote {
            width: coverage.width,
            length: coverage.length,
            area: coverage.area,
            material: coverage.material.into(),
            budget: coverage.budget(),
            quote_id: stamp.id,
            issued_on: stamp.issued_on,
            valid_until: stamp.valid_until,
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error { message, fatal }
    }

    /// Write this event as one JSON line
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    /// Emit this event to stdout, logging failures
    pub fn emit(&self) {
        if let Err(e) = self.write_to(&mut io::stdout().lock()) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }
}
