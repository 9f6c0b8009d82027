//! Application state (Model in TEA pattern)

use coberturas_core::{compute_budget, Budget, MaterialType};

use crate::calculator::CalculatorState;
use crate::config::Settings;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Values shared by the page with the coverage drawing and the budget summary
///
/// Only the calculator's notifications write here; the display widgets
/// borrow it read-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    pub area: f64,
    pub material: MaterialType,
    /// Dimensions the current area was computed from
    pub width: f64,
    pub length: f64,
}

impl Coverage {
    /// Budget for the current area and material, recomputed on every call
    pub fn budget(&self) -> Budget {
        compute_budget(self.area, self.material)
    }
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,

    /// Loaded configuration (defaults for reset, UI toggles)
    pub settings: Settings,

    /// Input component state
    pub calculator: CalculatorState,

    /// Page-level shared state
    pub coverage: Coverage,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let calculator = CalculatorState::new(&settings.defaults);
        let coverage = Coverage {
            area: calculator.area(),
            material: calculator.material,
            width: calculator.width,
            length: calculator.length,
        };

        Self {
            phase: AppPhase::Running,
            settings,
            calculator,
            coverage,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
