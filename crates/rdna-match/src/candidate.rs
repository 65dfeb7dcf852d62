//! Per-refrigerant comparison rows.

use crate::phase::PhaseEstimate;
use rdna_core::numeric::round_dp;
use rdna_fluids::FluidError;
use serde::Serialize;

/// Confidence [%] for a pressure deviation: linear decay, floored at 0.
///
/// With the default slope of 50 %/bar, 0 bar gives 100 %, 1 bar gives 50 %
/// and anything from 2 bar on gives 0 %.
pub fn confidence_pct(diff_bar: f64, slope_per_bar: f64) -> f64 {
    (100.0 - diff_bar.abs() * slope_per_bar).max(0.0)
}

/// One row of the comparison table.
///
/// Displayed values are rounded when the row is built (pressures to 2
/// decimals, confidence to 1). The unrounded difference is kept for the
/// tolerance filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateResult {
    pub name: String,
    pub saturation_pressure_bar: f64,
    pub pressure_diff_bar: f64,
    pub confidence_pct: f64,
    pub phase: PhaseEstimate,
    #[serde(skip)]
    exact_diff_bar: f64,
}

impl CandidateResult {
    /// Build a row from the dew pressure and measured pressure, both in Pa.
    pub fn new(
        name: impl Into<String>,
        saturation_pressure_pa: f64,
        measured_pressure_pa: f64,
        confidence_slope_per_bar: f64,
        phase: PhaseEstimate,
    ) -> Self {
        let diff_bar = (saturation_pressure_pa - measured_pressure_pa) / rdna_core::PA_PER_BAR;
        let confidence = confidence_pct(diff_bar, confidence_slope_per_bar);

        Self {
            name: name.into(),
            saturation_pressure_bar: round_dp(saturation_pressure_pa / rdna_core::PA_PER_BAR, 2),
            pressure_diff_bar: round_dp(diff_bar, 2),
            confidence_pct: round_dp(confidence, 1),
            phase,
            exact_diff_bar: diff_bar,
        }
    }

    /// Unrounded `(P_sat - P_measured)` in bar.
    pub fn exact_diff_bar(&self) -> f64 {
        self.exact_diff_bar
    }

    /// Whether the unrounded difference is strictly inside the tolerance.
    pub fn within_tolerance(&self, tolerance_bar: f64) -> bool {
        self.exact_diff_bar.abs() < tolerance_bar
    }
}

/// Outcome of evaluating one catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateOutcome {
    Success(CandidateResult),
    /// The dew pressure query failed; the entry contributes no row.
    Skipped {
        refrigerant: String,
        reason: FluidError,
    },
}

impl CandidateOutcome {
    pub fn into_result(self) -> Option<CandidateResult> {
        match self {
            CandidateOutcome::Success(result) => Some(result),
            CandidateOutcome::Skipped { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::Phase;

    #[test]
    fn confidence_formula() {
        assert_eq!(confidence_pct(0.0, 50.0), 100.0);
        assert_eq!(confidence_pct(1.0, 50.0), 50.0);
        assert_eq!(confidence_pct(-1.0, 50.0), 50.0);
        assert_eq!(confidence_pct(2.0, 50.0), 0.0);
        assert_eq!(confidence_pct(7.5, 50.0), 0.0);
    }

    #[test]
    fn row_rounding() {
        let row = CandidateResult::new(
            "R134a",
            571_654.0,
            500_000.0,
            50.0,
            PhaseEstimate::Known(Phase::Saturated),
        );
        assert_eq!(row.saturation_pressure_bar, 5.72);
        assert_eq!(row.pressure_diff_bar, 0.72);
        assert_eq!(row.confidence_pct, 64.2);
        assert!((row.exact_diff_bar() - 0.71654).abs() < 1e-12);
    }

    #[test]
    fn tolerance_uses_unrounded_difference() {
        // 0.204 bar rounds to 0.20 but is still outside a 0.2 bar tolerance
        let row = CandidateResult::new("R22", 520_400.0, 500_000.0, 50.0, PhaseEstimate::Unknown);
        assert_eq!(row.pressure_diff_bar, 0.2);
        assert!(!row.within_tolerance(0.2));

        // 0.196 bar rounds to 0.20 and is inside
        let row = CandidateResult::new("R22", 519_600.0, 500_000.0, 50.0, PhaseEstimate::Unknown);
        assert_eq!(row.pressure_diff_bar, 0.2);
        assert!(row.within_tolerance(0.2));
    }

    #[test]
    fn negative_difference_when_measured_is_higher() {
        let row = CandidateResult::new("R744", 400_000.0, 500_000.0, 50.0, PhaseEstimate::Unknown);
        assert_eq!(row.pressure_diff_bar, -1.0);
        assert_eq!(row.confidence_pct, 50.0);
    }

    #[test]
    fn skipped_has_no_result() {
        let outcome = CandidateOutcome::Skipped {
            refrigerant: "R417A".into(),
            reason: FluidError::UnknownRefrigerant {
                name: "R417A".into(),
            },
        };
        assert!(outcome.into_result().is_none());
    }
}
