//! # coberturas-core - Core Domain Types
//!
//! Foundation crate for Coberturas. Provides the material catalogue, the
//! pricing/area engine, the visualization scale policy, quote stamps,
//! display formatting, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** and no terminal code.
//!
//! ## Public API
//!
//! ### Materials (`material`)
//! - [`MaterialType`] - The closed set of covering materials
//! - [`price_of()`], [`name_of()`] - Total lookups over the set
//! - [`price_of_key()`], [`name_of_key()`] - String-keyed lookups with default fallback
//!
//! ### Pricing (`pricing`)
//! - [`compute_area()`] - Width x length
//! - [`compute_budget()`] - Material, installation, total and financed total
//! - [`Budget`] - The four budget values
//!
//! ### Scale (`scale`)
//! - [`scale_shape()`] - Capped linear pixel scale for the coverage drawing
//!
//! ### Quotes (`quote`)
//! - [`QuoteStamp`] - Display-only quote id with issue and validity dates
//!
//! ### Formatting (`format`)
//! - [`format_brl()`], [`format_area()`], [`format_date_br()`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use coberturas_core::prelude::*;
//! ```

pub mod error;
pub mod format;
pub mod logging;
pub mod material;
pub mod pricing;
pub mod quote;
pub mod scale;

/// Prelude for common imports used throughout all Coberturas crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use format::{format_area, format_brl, format_date_br, format_meters};
pub use material::{name_of, name_of_key, price_of, price_of_key, MaterialType};
pub use pricing::{
    compute_area, compute_budget, Budget, INSTALLATION_RATE, INSTALLMENT_MULTIPLIER,
    MAX_INSTALLMENTS,
};
pub use quote::{QuoteStamp, QUOTE_ID_PREFIX, VALIDITY_DAYS};
pub use scale::{
    scale_shape, ScaledShape, LENGTH_CAP_PX, LENGTH_FACTOR, WIDTH_CAP_PX, WIDTH_FACTOR,
};
