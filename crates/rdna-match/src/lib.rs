//! rdna-match: refrigerant identification from a single P/T reading.
//!
//! Given a measured pressure and temperature, every refrigerant in the
//! configured catalog is compared against its dew line:
//! - dew pressure at the measured temperature → deviation and confidence
//! - dew temperature at the measured pressure → phase estimate
//!
//! Candidates within the pressure tolerance form the match set. An empty
//! match set is a meaningful result: nothing in the catalog condenses at the
//! reading, which often points to air or other non-condensable gases.
//!
//! # Example
//!
//! ```no_run
//! use rdna_fluids::CoolPropSource;
//! use rdna_match::{Measurement, MatcherConfig, identify, report};
//!
//! let source = CoolPropSource::new();
//! let reading = Measurement::from_bar_celsius(5.0, 20.0).unwrap();
//! let result = identify(&source, &reading, &MatcherConfig::default());
//! print!("{}", report::render_text(&result));
//! ```

pub mod candidate;
pub mod config;
pub mod error;
pub mod matcher;
pub mod measurement;
pub mod phase;
pub mod report;

pub use candidate::{CandidateOutcome, CandidateResult, confidence_pct};
pub use config::{MatcherConfig, load_config};
pub use error::{MatchError, MatchResult};
pub use matcher::{Identification, Verdict, estimate_phase, evaluate_candidate, identify};
pub use measurement::{DEFAULT_PRESSURE_BAR, DEFAULT_TEMPERATURE_C, Measurement};
pub use phase::{Phase, PhaseEstimate, classify_phase};
pub use report::ReportFormat;
