//! Presentation formatting for money, areas and dates
//!
//! Money follows the pt-BR convention (`R$ 1.234,56`). Areas and lengths keep
//! a plain dot decimal, matching how the calculator echoes typed values.

use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format a value as Brazilian reais with two decimals
///
/// Cents are rounded half away from zero. There is no upper bound: values
/// past the range of `Decimal` are printed from their exact `f64` expansion.
///
/// ```
/// use coberturas_core::format_brl;
/// assert_eq!(format_brl(104_160.0), "R$ 104.160,00");
/// ```
pub fn format_brl(value: f64) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };

    if !value.is_finite() {
        return format!("{sign}R$ ∞");
    }

    let digits = match Decimal::from_f64(value.abs()) {
        Some(amount) => format!(
            "{:.2}",
            amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{:.2}", value.abs()),
    };
    let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let is_zero = !digits.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if is_zero { "" } else { sign };
    format!("{sign}R$ {grouped},{frac}")
}

/// Format an area in square metres with `decimals` places
pub fn format_area(area: f64, decimals: usize) -> String {
    format!("{area:.decimals$} m²")
}

/// Format a length in metres with one decimal
pub fn format_meters(value: f64) -> String {
    format!("{value:.1}m")
}

/// Format a date as `dd/mm/yyyy`
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
