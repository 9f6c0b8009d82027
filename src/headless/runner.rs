//! Headless mode runner

use coberturas_app::config::Settings;
use coberturas_app::AppState;
use coberturas_core::prelude::*;
use coberturas_core::QuoteStamp;
use std::io::Write;

use super::HeadlessEvent;

/// Price the configured covering and print it as JSON
pub fn run_headless(settings: Settings) -> Result<()> {
    run_headless_to(settings, QuoteStamp::generate(), &mut std::io::stdout().lock())
}

/// Same as [`run_headless`], writing to `out` with a given stamp
pub fn run_headless_to<W: Write>(
    settings: Settings,
    stamp: QuoteStamp,
    out: &mut W,
) -> Result<()> {
    info!("Coberturas starting in HEADLESS mode");

    let state = AppState::with_settings(settings);
    let event = HeadlessEvent::quote(&state.coverage, stamp);

    event.write_to(out).context("Failed to write quote")?;

    info!("Quote written for {} m²", state.coverage.area);
    Ok(())
}
