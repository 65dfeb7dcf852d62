//! Fluid property errors.

use rdna_core::CoreError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during saturation property queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative pressure, NaN temperature, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Value outside the substance's valid envelope.
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Refrigerant not known to the property source.
    #[error("Unknown refrigerant: {name}")]
    UnknownRefrigerant { name: String },

    /// Backend (CoolProp) error.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl From<CoreError> for FluidError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, .. } => FluidError::NonPhysical { what },
            CoreError::InvalidArg { what } => FluidError::InvalidArg { what },
        }
    }
}
