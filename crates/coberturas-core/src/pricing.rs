//! Area and budget arithmetic
//!
//! Pure functions over the price table. Values are never rounded here;
//! rounding to two decimals happens only when formatting for display.

use serde::Serialize;

use crate::material::{price_of, MaterialType};

/// Installation cost in R$ per square metre, independent of material
pub const INSTALLATION_RATE: f64 = 35.0;

/// Markup applied when the total is paid in instalments
pub const INSTALLMENT_MULTIPLIER: f64 = 1.12;

/// Number of card instalments advertised with the financed total
pub const MAX_INSTALLMENTS: u32 = 12;

/// Covered area in square metres
///
/// No validation: callers on the input path already floor dimensions at zero.
pub fn compute_area(width: f64, length: f64) -> f64 {
    width * length
}

/// Price breakdown for a covered area
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Budget {
    /// area x unit price of the material
    pub material_subtotal: f64,
    /// area x [`INSTALLATION_RATE`]
    pub installation_subtotal: f64,
    /// material + installation
    pub total: f64,
    /// total x [`INSTALLMENT_MULTIPLIER`]
    pub financed_total: f64,
}

impl Budget {
    /// Value of a single instalment when the financed total is split evenly
    pub fn installment_value(&self) -> f64 {
        self.financed_total / f64::from(MAX_INSTALLMENTS)
    }
}

/// Compute the full budget for `area` square metres of `material`
pub fn compute_budget(area: f64, material: MaterialType) -> Budget {
    let material_subtotal = area * price_of(material);
    let installation_subtotal = area * INSTALLATION_RATE;
    let total = material_subtotal + installation_subtotal;

    Budget {
        material_subtotal,
        installation_subtotal,
        total,
        financed_total: total * INSTALLMENT_MULTIPLIER,
    }
}
