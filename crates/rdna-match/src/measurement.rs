//! Single pressure/temperature reading.

use crate::error::{MatchError, MatchResult};
use rdna_core::units::{Pressure, Temperature, bar, bar_of, degc, degc_of, k_of, pa_of};

/// Default pressure input [bar(a)].
pub const DEFAULT_PRESSURE_BAR: f64 = 5.0;

/// Default temperature input [°C].
pub const DEFAULT_TEMPERATURE_C: f64 = 20.0;

/// An immutable pressure/temperature reading taken from a closed system.
///
/// Pressure is absolute and must be finite and non-negative. Temperature must
/// be finite; no other bound is applied, so readings outside a refrigerant's
/// envelope simply fail that refrigerant's property query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pressure: Pressure,
    temperature: Temperature,
}

impl Measurement {
    pub fn new(pressure: Pressure, temperature: Temperature) -> MatchResult<Self> {
        let p_pa = pa_of(pressure);
        if !p_pa.is_finite() {
            return Err(MatchError::InvalidMeasurement {
                what: "pressure must be finite",
            });
        }
        if p_pa < 0.0 {
            return Err(MatchError::InvalidMeasurement {
                what: "pressure must be >= 0 bar(a)",
            });
        }
        if !k_of(temperature).is_finite() {
            return Err(MatchError::InvalidMeasurement {
                what: "temperature must be finite",
            });
        }
        Ok(Self {
            pressure,
            temperature,
        })
    }

    /// Reading as entered by a technician: bar(a) and °C.
    pub fn from_bar_celsius(pressure_bar: f64, temperature_c: f64) -> MatchResult<Self> {
        Self::new(bar(pressure_bar), degc(temperature_c))
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn pressure_pa(&self) -> f64 {
        pa_of(self.pressure)
    }

    pub fn pressure_bar(&self) -> f64 {
        bar_of(self.pressure)
    }

    pub fn temperature_k(&self) -> f64 {
        k_of(self.temperature)
    }

    pub fn temperature_c(&self) -> f64 {
        degc_of(self.temperature)
    }
}

impl Default for Measurement {
    fn default() -> Self {
        Self {
            pressure: bar(DEFAULT_PRESSURE_BAR),
            temperature: degc(DEFAULT_TEMPERATURE_C),
        }
    }
}
