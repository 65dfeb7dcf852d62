//! Phase of the measured state relative to a candidate's dew line.

use serde::{Serialize, Serializer};
use std::fmt;

/// Physical phase inferred from comparing the measured temperature with the
/// candidate's dew temperature at the measured pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Within the saturation band around the dew temperature.
    Saturated,
    /// Warmer than the dew temperature.
    SuperheatedVapor,
    /// Colder than the dew temperature.
    SubcooledLiquid,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Saturated => "Saturated",
            Phase::SuperheatedVapor => "Superheated Vapor",
            Phase::SubcooledLiquid => "Subcooled Liquid",
        }
    }
}

/// Phase estimate for one candidate.
///
/// `Unknown` means the dew temperature could not be evaluated; the candidate
/// itself is still valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseEstimate {
    Known(Phase),
    Unknown,
}

impl PhaseEstimate {
    pub fn label(&self) -> &'static str {
        match self {
            PhaseEstimate::Known(phase) => phase.label(),
            PhaseEstimate::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PhaseEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for PhaseEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Classify a measured temperature against a dew temperature, both in K.
///
/// `|t - t_sat| < band_k` is saturated (strict), otherwise the sign decides.
pub fn classify_phase(t_k: f64, t_sat_k: f64, band_k: f64) -> Phase {
    if (t_k - t_sat_k).abs() < band_k {
        Phase::Saturated
    } else if t_k > t_sat_k {
        Phase::SuperheatedVapor
    } else {
        Phase::SubcooledLiquid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_band_is_saturated() {
        assert_eq!(classify_phase(300.0, 298.001, 2.0), Phase::Saturated);
        assert_eq!(classify_phase(300.0, 301.999, 2.0), Phase::Saturated);
        assert_eq!(classify_phase(300.0, 300.0, 2.0), Phase::Saturated);
    }

    #[test]
    fn band_edge_is_not_saturated() {
        assert_eq!(classify_phase(300.0, 298.0, 2.0), Phase::SuperheatedVapor);
        assert_eq!(classify_phase(300.0, 302.0, 2.0), Phase::SubcooledLiquid);
    }

    #[test]
    fn far_from_band() {
        assert_eq!(classify_phase(320.0, 280.0, 2.0), Phase::SuperheatedVapor);
        assert_eq!(classify_phase(250.0, 280.0, 2.0), Phase::SubcooledLiquid);
    }

    #[test]
    fn labels() {
        assert_eq!(PhaseEstimate::Known(Phase::SuperheatedVapor).to_string(), "Superheated Vapor");
        assert_eq!(PhaseEstimate::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&PhaseEstimate::Known(Phase::SubcooledLiquid)).unwrap();
        assert_eq!(json, "\"Subcooled Liquid\"");
    }
}
