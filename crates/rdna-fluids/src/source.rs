//! Saturation property source trait and validation helpers.

use crate::error::{FluidError, FluidResult};
use rdna_core::units::{Pressure, Temperature};

/// Vapor quality at which every saturation query is evaluated (dew line).
pub const DEW_QUALITY: f64 = 1.0;

/// Trait for saturation property sources.
///
/// Implementations must be thread-safe (Send + Sync) and reentrant: a query
/// never depends on an earlier query. Both queries are evaluated on the dew
/// line (quality = 1) and fail when the refrigerant is unknown or the input
/// lies outside its two-phase envelope.
pub trait PropertySource: Send + Sync {
    /// Get the source name (for debugging/logging).
    fn name(&self) -> &str;

    /// Saturation pressure of `refrigerant` at `temperature`.
    fn saturation_pressure(
        &self,
        refrigerant: &str,
        temperature: Temperature,
    ) -> FluidResult<Pressure>;

    /// Saturation temperature of `refrigerant` at `pressure`.
    fn saturation_temperature(
        &self,
        refrigerant: &str,
        pressure: Pressure,
    ) -> FluidResult<Temperature>;
}

/// Validation helpers for saturation queries.
pub(crate) mod validation {
    use super::*;

    /// Ensure a refrigerant identifier is non-empty.
    pub fn validate_refrigerant(name: &str) -> FluidResult<()> {
        if name.trim().is_empty() {
            return Err(FluidError::InvalidArg {
                what: "refrigerant identifier must not be empty",
            });
        }
        Ok(())
    }

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p_pa: f64) -> FluidResult<()> {
        if !p_pa.is_finite() || p_pa <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t_k: f64) -> FluidResult<()> {
        if !t_k.is_finite() || t_k <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }
}
