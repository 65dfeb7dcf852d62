//! CoolProp-based saturation property source.

use crate::error::{FluidError, FluidResult};
use crate::source::{DEW_QUALITY, PropertySource, validation};
use rdna_core::ensure_finite;
use rdna_core::units::{Pressure, Temperature, k, k_of, pa, pa_of};
use rfluids::io::{FluidInputPair, FluidParam};
use rfluids::native::AbstractState;

/// Default CoolProp backend (Helmholtz-energy equations of state).
pub const DEFAULT_BACKEND: &str = "HEOS";

/// CoolProp backend for saturation properties.
///
/// Refrigerant identifiers are handed to CoolProp unchanged, so its alias
/// table resolves names such as `R717` (ammonia) or `R744` (carbon dioxide).
///
/// Thread-safe: every query builds its own `AbstractState`, nothing is shared
/// between calls.
#[derive(Debug, Clone)]
pub struct CoolPropSource {
    backend: String,
}

impl CoolPropSource {
    /// Create a new CoolProp source on the default backend.
    pub fn new() -> Self {
        Self::with_backend(DEFAULT_BACKEND)
    }

    /// Create a CoolProp source on a specific backend (e.g. `"REFPROP"`).
    pub fn with_backend(backend: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
        }
    }

    pub fn backend(&self) -> &str {
        &self.backend
    }

    /// Build an `AbstractState`, update it on the dew line and read one output.
    fn dew_line_output(
        &self,
        refrigerant: &str,
        pair: FluidInputPair,
        input1: f64,
        input2: f64,
        output: FluidParam,
    ) -> FluidResult<f64> {
        let mut state = AbstractState::new(self.backend.as_str(), refrigerant).map_err(|e| {
            FluidError::UnknownRefrigerant {
                name: format!("{} ({})", refrigerant, e),
            }
        })?;

        state
            .update(pair, input1, input2)
            .map_err(|e| FluidError::Backend {
                message: format!(
                    "rfluids error updating {} at ({}, {}): {}",
                    refrigerant, input1, input2, e
                ),
            })?;

        let value = state.keyed_output(output).map_err(|e| FluidError::Backend {
            message: format!("rfluids error reading output for {}: {}", refrigerant, e),
        })?;

        let value = ensure_finite(value, "saturation output")?;
        if value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "saturation output must be positive",
            });
        }
        Ok(value)
    }
}

impl Default for CoolPropSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertySource for CoolPropSource {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn saturation_pressure(
        &self,
        refrigerant: &str,
        temperature: Temperature,
    ) -> FluidResult<Pressure> {
        validation::validate_refrigerant(refrigerant)?;
        let t_k = k_of(temperature);
        validation::validate_temperature(t_k)?;

        // QT pair: quality first, then temperature
        let p_pa = self.dew_line_output(
            refrigerant,
            FluidInputPair::QT,
            DEW_QUALITY,
            t_k,
            FluidParam::P,
        )?;
        Ok(pa(p_pa))
    }

    fn saturation_temperature(
        &self,
        refrigerant: &str,
        pressure: Pressure,
    ) -> FluidResult<Temperature> {
        validation::validate_refrigerant(refrigerant)?;
        let p_pa = pa_of(pressure);
        validation::validate_pressure(p_pa)?;

        // PQ pair: pressure first, then quality
        let t_k = self.dew_line_output(
            refrigerant,
            FluidInputPair::PQ,
            p_pa,
            DEW_QUALITY,
            FluidParam::T,
        )?;
        Ok(k(t_k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_name() {
        let source = CoolPropSource::new();
        assert_eq!(source.name(), "CoolProp");
        assert_eq!(source.backend(), DEFAULT_BACKEND);
    }

    #[test]
    fn custom_backend_is_kept() {
        let source = CoolPropSource::with_backend("REFPROP");
        assert_eq!(source.backend(), "REFPROP");
    }

    #[test]
    fn rejects_empty_identifier_before_backend() {
        let source = CoolPropSource::new();
        let err = source.saturation_pressure("", k(293.15)).unwrap_err();
        assert!(matches!(err, FluidError::InvalidArg { .. }));
    }

    #[test]
    fn rejects_zero_pressure_before_backend() {
        let source = CoolPropSource::new();
        let err = source.saturation_temperature("R134a", pa(0.0)).unwrap_err();
        assert!(matches!(err, FluidError::NonPhysical { .. }));
    }
}
