//! Tabulated dew-line property source.
//!
//! Serves saturation queries from per-refrigerant `(T, P)` tables instead of an
//! equation of state. Between table nodes `ln P` is interpolated linearly in
//! `1/T`, the Clausius–Clapeyron form, which keeps the error small even with
//! coarse tables:
//!
//! ```text
//! ln P(T) ≈ ln P_i + (ln P_{i+1} - ln P_i) * (1/T - 1/T_i) / (1/T_{i+1} - 1/T_i)
//! ```
//!
//! The same relation is inverted for saturation temperature. Queries outside
//! a table's envelope fail with [`FluidError::OutOfRange`]; nothing is
//! extrapolated.

use crate::error::{FluidError, FluidResult};
use crate::source::{PropertySource, validation};
use rdna_core::units::{Pressure, Temperature, k, k_of, pa, pa_of};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One dew-line node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DewPoint {
    /// Saturation temperature [K]
    pub t_k: f64,
    /// Saturation pressure [Pa]
    pub p_pa: f64,
}

/// Validated dew-line table for a single refrigerant.
///
/// Nodes are sorted by temperature and pressure rises strictly with
/// temperature, so both directions of the lookup are single-valued.
#[derive(Debug, Clone, PartialEq)]
pub struct DewCurve {
    points: Vec<DewPoint>,
}

impl DewCurve {
    pub fn new(mut points: Vec<DewPoint>) -> FluidResult<Self> {
        if points.len() < 2 {
            return Err(FluidError::InvalidArg {
                what: "dew curve needs at least 2 points",
            });
        }
        for pt in &points {
            validation::validate_temperature(pt.t_k)?;
            validation::validate_pressure(pt.p_pa)?;
        }

        points.sort_by(|a, b| a.t_k.total_cmp(&b.t_k));

        for pair in points.windows(2) {
            if pair[1].t_k <= pair[0].t_k {
                return Err(FluidError::InvalidArg {
                    what: "dew curve temperatures must be distinct",
                });
            }
            if pair[1].p_pa <= pair[0].p_pa {
                return Err(FluidError::InvalidArg {
                    what: "dew curve pressure must rise with temperature",
                });
            }
        }

        Ok(Self { points })
    }

    /// Temperature envelope `[T_min, T_max]` in K.
    pub fn temperature_range(&self) -> (f64, f64) {
        (self.points[0].t_k, self.points[self.points.len() - 1].t_k)
    }

    /// Pressure envelope `[P_min, P_max]` in Pa.
    pub fn pressure_range(&self) -> (f64, f64) {
        (self.points[0].p_pa, self.points[self.points.len() - 1].p_pa)
    }

    /// Index `i` of the segment `[i, i + 1]` containing `value`.
    fn segment(&self, value: f64, key: impl Fn(&DewPoint) -> f64) -> usize {
        let upper = self.points.partition_point(|pt| key(pt) < value);
        upper.clamp(1, self.points.len() - 1) - 1
    }

    pub fn pressure_at(&self, t_k: f64) -> FluidResult<f64> {
        let (t_min, t_max) = self.temperature_range();
        if t_k < t_min || t_k > t_max {
            return Err(FluidError::OutOfRange {
                what: "temperature outside tabulated dew curve",
            });
        }

        let i = self.segment(t_k, |pt| pt.t_k);
        let (a, b) = (self.points[i], self.points[i + 1]);
        let frac = (1.0 / t_k - 1.0 / a.t_k) / (1.0 / b.t_k - 1.0 / a.t_k);
        let ln_p = a.p_pa.ln() + frac * (b.p_pa.ln() - a.p_pa.ln());
        Ok(ln_p.exp().clamp(a.p_pa, b.p_pa))
    }

    pub fn temperature_at(&self, p_pa: f64) -> FluidResult<f64> {
        let (p_min, p_max) = self.pressure_range();
        if p_pa < p_min || p_pa > p_max {
            return Err(FluidError::OutOfRange {
                what: "pressure outside tabulated dew curve",
            });
        }

        let i = self.segment(p_pa, |pt| pt.p_pa);
        let (a, b) = (self.points[i], self.points[i + 1]);
        let frac = (p_pa.ln() - a.p_pa.ln()) / (b.p_pa.ln() - a.p_pa.ln());
        let inv_t = 1.0 / a.t_k + frac * (1.0 / b.t_k - 1.0 / a.t_k);
        Ok((1.0 / inv_t).clamp(a.t_k, b.t_k))
    }
}

/// On-disk layout of a tabulated source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabulatedData {
    pub refrigerants: BTreeMap<String, Vec<DewPoint>>,
}

/// Property source backed by dew-line tables.
#[derive(Debug, Clone, Default)]
pub struct TabulatedSource {
    curves: BTreeMap<String, DewCurve>,
}

impl TabulatedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the dew curve for a refrigerant.
    pub fn insert(
        &mut self,
        refrigerant: impl Into<String>,
        points: Vec<DewPoint>,
    ) -> FluidResult<()> {
        let name = refrigerant.into();
        validation::validate_refrigerant(&name)?;
        let curve = DewCurve::new(points)?;
        self.curves.insert(name, curve);
        Ok(())
    }

    /// Builder-style variant of [`TabulatedSource::insert`].
    pub fn with_curve(
        mut self,
        refrigerant: impl Into<String>,
        points: Vec<DewPoint>,
    ) -> FluidResult<Self> {
        self.insert(refrigerant, points)?;
        Ok(self)
    }

    pub fn from_data(data: TabulatedData) -> FluidResult<Self> {
        let mut source = Self::new();
        for (name, points) in data.refrigerants {
            source.insert(name, points)?;
        }
        Ok(source)
    }

    pub fn from_yaml_str(content: &str) -> FluidResult<Self> {
        let data: TabulatedData = serde_yaml::from_str(content).map_err(|e| FluidError::Backend {
            message: format!("invalid dew-line table: {}", e),
        })?;
        Self::from_data(data)
    }

    pub fn refrigerants(&self) -> impl Iterator<Item = &str> {
        self.curves.keys().map(String::as_str)
    }

    pub fn curve(&self, refrigerant: &str) -> FluidResult<&DewCurve> {
        self.curves
            .get(refrigerant)
            .ok_or_else(|| FluidError::UnknownRefrigerant {
                name: refrigerant.to_string(),
            })
    }
}

impl PropertySource for TabulatedSource {
    fn name(&self) -> &str {
        "Tabulated"
    }

    fn saturation_pressure(
        &self,
        refrigerant: &str,
        temperature: Temperature,
    ) -> FluidResult<Pressure> {
        let t_k = k_of(temperature);
        validation::validate_temperature(t_k)?;
        let p_pa = self.curve(refrigerant)?.pressure_at(t_k)?;
        Ok(pa(p_pa))
    }

    fn saturation_temperature(
        &self,
        refrigerant: &str,
        pressure: Pressure,
    ) -> FluidResult<Temperature> {
        let p_pa = pa_of(pressure);
        validation::validate_pressure(p_pa)?;
        let t_k = self.curve(refrigerant)?.temperature_at(p_pa)?;
        Ok(k(t_k))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn curve() -> DewCurve {
        DewCurve::new(vec![
            DewPoint { t_k: 233.15, p_pa: 51_200.0 },
            DewPoint { t_k: 263.15, p_pa: 200_600.0 },
            DewPoint { t_k: 293.15, p_pa: 571_700.0 },
            DewPoint { t_k: 333.15, p_pa: 1_681_800.0 },
        ])
        .unwrap()
    }

    proptest! {
        #[test]
        fn pressure_then_temperature_roundtrips(t_k in 233.15_f64..333.15_f64) {
            let curve = curve();
            let p = curve.pressure_at(t_k).unwrap();
            let back = curve.temperature_at(p).unwrap();
            prop_assert!((back - t_k).abs() < 1e-6);
        }

        #[test]
        fn pressure_is_monotonic(a in 233.15_f64..333.15_f64, b in 233.15_f64..333.15_f64) {
            let curve = curve();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(curve.pressure_at(lo).unwrap() <= curve.pressure_at(hi).unwrap());
        }
    }
}
