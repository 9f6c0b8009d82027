//! Main TUI runner - entry point and event loop

use coberturas_app::config::Settings;
use coberturas_app::process::process_message;
use coberturas_app::AppState;
use coberturas_core::prelude::*;
use ratatui::DefaultTerminal;

use super::{event, render, terminal};

/// Run the calculator until the user quits
pub fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = terminal::init()?;

    let mut state = AppState::with_settings(settings);
    info!(
        "Calculator started: {}m x {}m, material={}",
        state.calculator.width,
        state.calculator.length,
        state.calculator.material.key()
    );

    let result = run_loop(&mut term, &mut state);

    terminal::restore();

    if let Err(e) = &result {
        error!("Calculator stopped with error: {}", e);
    } else {
        info!("Calculator exited");
    }

    result
}

/// Redraw after every processed message; idle polls draw nothing
fn run_loop(terminal: &mut DefaultTerminal, state: &mut AppState) -> Result<()> {
    let mut needs_redraw = true;

    while !state.should_quit() {
        if needs_redraw {
            terminal
                .draw(|frame| render::view(frame, state))
                .map_err(|e| Error::terminal(format!("Failed to draw frame: {}", e)))?;
            needs_redraw = false;
        }

        if let Some(message) = event::poll()? {
            process_message(state, message);
            needs_redraw = true;
        }
    }

    Ok(())
}
