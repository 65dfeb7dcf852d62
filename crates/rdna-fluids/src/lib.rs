//! rdna-fluids: saturation property sources for refrigerant identification.
//!
//! Provides:
//! - `PropertySource` trait (dew-line saturation pressure / temperature)
//! - CoolProp backend for real refrigerant properties
//! - Tabulated backend for offline use and deterministic tests
//! - Refrigerant catalog and catalog metadata
//! - Dew-line sweeps for PT charts
//!
//! # Architecture
//!
//! The `PropertySource` trait isolates the matcher from backend dependencies.
//! CoolProp (via `rfluids`) is the primary backend; the tabulated backend
//! answers the same two queries from `(T, P)` tables.
//!
//! # Example
//!
//! ```no_run
//! use rdna_fluids::{CoolPropSource, PropertySource};
//! use rdna_core::units::{bar_of, degc};
//!
//! let source = CoolPropSource::new();
//! let p_sat = source.saturation_pressure("R134a", degc(20.0)).unwrap();
//! println!("R134a dew pressure at 20 °C: {:.2} bar", bar_of(p_sat));
//! ```

pub mod catalog;
pub mod coolprop;
pub mod error;
pub mod source;
pub mod sweeps;
pub mod tabulated;

// Re-exports for ergonomics
pub use catalog::{
    RefrigerantCatalog, RefrigerantFamily, RefrigerantInfo, STANDARD_REFRIGERANT_IDS,
    filter_refrigerants, refrigerant_info, standard_refrigerants,
};
pub use coolprop::CoolPropSource;
pub use error::{FluidError, FluidResult};
pub use source::{DEW_QUALITY, PropertySource};
pub use sweeps::{SaturationCurve, SaturationPoint, TemperatureSweep, saturation_curve};
pub use tabulated::{DewCurve, DewPoint, TabulatedData, TabulatedSource};
