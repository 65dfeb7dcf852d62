//! Refrigerant matching.
//!
//! For every catalog entry, in catalog order:
//! 1. dew pressure at the measured temperature (failure skips the entry),
//! 2. deviation from the measured pressure and a confidence score,
//! 3. dew temperature at the measured pressure for the phase estimate
//!    (failure only makes the phase `Unknown`).
//!
//! Rows whose unrounded deviation is strictly inside the tolerance form the
//! match set. Neither table is sorted.

use crate::candidate::{CandidateOutcome, CandidateResult};
use crate::config::MatcherConfig;
use crate::measurement::Measurement;
use crate::phase::{PhaseEstimate, classify_phase};
use rdna_core::units::{k_of, pa_of};
use rdna_fluids::PropertySource;
use serde::Serialize;

/// Whether any catalog entry matched the reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    MatchFound,
    /// Nothing condenses at this P/T: often air or other non-condensables.
    NoMatch,
}

/// Result of one identification run.
#[derive(Debug, Clone, PartialEq)]
pub struct Identification {
    pub measurement: Measurement,
    pub tolerance_bar: f64,
    /// Every refrigerant whose dew pressure could be evaluated, in catalog order
    pub full_table: Vec<CandidateResult>,
    /// Subset of `full_table` within tolerance, in catalog order
    pub matches: Vec<CandidateResult>,
}

impl Identification {
    pub fn verdict(&self) -> Verdict {
        if self.matches.is_empty() {
            Verdict::NoMatch
        } else {
            Verdict::MatchFound
        }
    }

    pub fn is_match(&self) -> bool {
        self.verdict() == Verdict::MatchFound
    }

    /// Highest-confidence match; the first one in catalog order on ties.
    pub fn best_match(&self) -> Option<&CandidateResult> {
        self.matches.iter().fold(None, |best, row| match best {
            Some(current) if current.confidence_pct >= row.confidence_pct => Some(current),
            _ => Some(row),
        })
    }
}

/// Estimate the phase of the reading relative to one refrigerant's dew line.
pub fn estimate_phase<S: PropertySource + ?Sized>(
    source: &S,
    measurement: &Measurement,
    band_k: f64,
    refrigerant: &str,
) -> PhaseEstimate {
    match source.saturation_temperature(refrigerant, measurement.pressure()) {
        Ok(t_sat) => PhaseEstimate::Known(classify_phase(
            measurement.temperature_k(),
            k_of(t_sat),
            band_k,
        )),
        Err(err) => {
            tracing::debug!(refrigerant, error = %err, "dew temperature unavailable, phase unknown");
            PhaseEstimate::Unknown
        }
    }
}

/// Compare the reading against one refrigerant.
pub fn evaluate_candidate<S: PropertySource + ?Sized>(
    source: &S,
    measurement: &Measurement,
    config: &MatcherConfig,
    refrigerant: &str,
) -> CandidateOutcome {
    let p_sat = match source.saturation_pressure(refrigerant, measurement.temperature()) {
        Ok(p_sat) => p_sat,
        Err(reason) => {
            tracing::debug!(refrigerant, error = %reason, "dew pressure unavailable, skipping");
            return CandidateOutcome::Skipped {
                refrigerant: refrigerant.to_string(),
                reason,
            };
        }
    };

    let phase = estimate_phase(source, measurement, config.saturation_band_k, refrigerant);

    CandidateOutcome::Success(CandidateResult::new(
        refrigerant,
        pa_of(p_sat),
        measurement.pressure_pa(),
        config.confidence_slope_per_bar,
        phase,
    ))
}

/// Identify plausible refrigerants for a reading.
///
/// Never fails: entries the source cannot evaluate are left out, and both
/// tables may be empty.
pub fn identify<S: PropertySource + ?Sized>(
    source: &S,
    measurement: &Measurement,
    config: &MatcherConfig,
) -> Identification {
    let full_table: Vec<CandidateResult> = config
        .catalog
        .iter()
        .filter_map(|refrigerant| {
            evaluate_candidate(source, measurement, config, refrigerant).into_result()
        })
        .collect();

    let matches: Vec<CandidateResult> = full_table
        .iter()
        .filter(|row| row.within_tolerance(config.tolerance_bar))
        .cloned()
        .collect();

    tracing::info!(
        source = source.name(),
        p_bar = measurement.pressure_bar(),
        t_c = measurement.temperature_c(),
        evaluated = full_table.len(),
        skipped = config.catalog.len() - full_table.len(),
        matches = matches.len(),
        "identification complete"
    );

    Identification {
        measurement: *measurement,
        tolerance_bar: config.tolerance_bar,
        full_table,
        matches,
    }
}
