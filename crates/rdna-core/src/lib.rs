//! rdna-core: shared foundation for the refrigerant identification workspace.
//!
//! Contains:
//! - units (uom SI types + bar / Celsius constructors)
//! - numeric (Real + tolerances + rounding helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
