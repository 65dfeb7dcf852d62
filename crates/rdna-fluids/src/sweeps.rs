//! Dew-line sweeps for PT charts.
//!
//! Evaluates a refrigerant's saturation pressure across a temperature range.
//! Points the property source cannot evaluate are skipped, the same way the
//! matcher skips candidates.

use crate::error::{FluidError, FluidResult};
use crate::source::PropertySource;
use rdna_core::numeric::{Tolerances, nearly_equal};
use rdna_core::units::{Pressure, Temperature, k, k_of};

/// Linearly spaced temperature sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSweep {
    pub start: Temperature,
    pub end: Temperature,
    pub num_points: usize,
}

impl TemperatureSweep {
    pub fn new(start: Temperature, end: Temperature, num_points: usize) -> FluidResult<Self> {
        if num_points < 2 {
            return Err(FluidError::InvalidArg {
                what: "sweep must have at least 2 points",
            });
        }
        let (t0, t1) = (k_of(start), k_of(end));
        if !t0.is_finite() || !t1.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "sweep bounds must be finite",
            });
        }
        if nearly_equal(t0, t1, Tolerances::default()) {
            return Err(FluidError::InvalidArg {
                what: "start and end temperatures must be different",
            });
        }
        Ok(Self {
            start,
            end,
            num_points,
        })
    }

    /// Generate all sweep temperatures.
    pub fn generate_points(&self) -> Vec<Temperature> {
        let (t0, t1) = (k_of(self.start), k_of(self.end));
        let delta = (t1 - t0) / (self.num_points - 1) as f64;

        let mut points: Vec<Temperature> = (0..self.num_points)
            .map(|i| k(t0 + i as f64 * delta))
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationPoint {
    pub temperature: Temperature,
    pub pressure: Pressure,
}

/// Result of a dew-line sweep.
#[derive(Debug, Clone)]
pub struct SaturationCurve {
    pub refrigerant: String,
    /// Successfully evaluated points, in sweep order
    pub points: Vec<SaturationPoint>,
    /// Number of sweep temperatures the source could not evaluate
    pub num_failed: usize,
}

impl SaturationCurve {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Evaluate the dew-line pressure of `refrigerant` across `sweep`.
pub fn saturation_curve<S: PropertySource + ?Sized>(
    source: &S,
    refrigerant: &str,
    sweep: &TemperatureSweep,
) -> SaturationCurve {
    let temperatures = sweep.generate_points();
    let mut points = Vec::with_capacity(temperatures.len());
    let mut num_failed = 0;

    for temperature in temperatures {
        match source.saturation_pressure(refrigerant, temperature) {
            Ok(pressure) => points.push(SaturationPoint {
                temperature,
                pressure,
            }),
            Err(err) => {
                tracing::debug!(
                    refrigerant,
                    t_k = k_of(temperature),
                    error = %err,
                    "dew-line point skipped"
                );
                num_failed += 1;
            }
        }
    }

    SaturationCurve {
        refrigerant: refrigerant.to_string(),
        points,
        num_failed,
    }
}
