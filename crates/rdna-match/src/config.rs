//! Matcher configuration.
//!
//! Every field is optional in YAML; missing fields fall back to the defaults
//! below. Unknown keys are rejected so typos do not silently change results.
//!
//! ```yaml
//! tolerance_bar: 0.2
//! confidence_slope_per_bar: 50.0
//! saturation_band_k: 2.0
//! catalog: [R134a, R404A, R407C]
//! ```

use crate::error::{MatchError, MatchResult};
use rdna_fluids::RefrigerantCatalog;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest `|diff|` [bar] (exclusive) for a candidate to count as a match.
pub const DEFAULT_TOLERANCE_BAR: f64 = 0.2;

/// Confidence lost per bar of deviation; confidence reaches 0 at 2 bar.
pub const DEFAULT_CONFIDENCE_SLOPE_PER_BAR: f64 = 50.0;

/// Half-width [K] (exclusive) of the band classified as saturated.
pub const DEFAULT_SATURATION_BAND_K: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
    pub tolerance_bar: f64,
    pub confidence_slope_per_bar: f64,
    pub saturation_band_k: f64,
    pub catalog: RefrigerantCatalog,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            tolerance_bar: DEFAULT_TOLERANCE_BAR,
            confidence_slope_per_bar: DEFAULT_CONFIDENCE_SLOPE_PER_BAR,
            saturation_band_k: DEFAULT_SATURATION_BAND_K,
            catalog: RefrigerantCatalog::standard(),
        }
    }
}

impl MatcherConfig {
    pub fn with_catalog(mut self, catalog: RefrigerantCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_tolerance_bar(mut self, tolerance_bar: f64) -> Self {
        self.tolerance_bar = tolerance_bar;
        self
    }

    pub fn validate(&self) -> MatchResult<()> {
        if !self.tolerance_bar.is_finite() || self.tolerance_bar <= 0.0 {
            return Err(MatchError::InvalidConfig {
                what: "tolerance_bar must be positive and finite",
            });
        }
        if !self.confidence_slope_per_bar.is_finite() || self.confidence_slope_per_bar <= 0.0 {
            return Err(MatchError::InvalidConfig {
                what: "confidence_slope_per_bar must be positive and finite",
            });
        }
        if !self.saturation_band_k.is_finite() || self.saturation_band_k <= 0.0 {
            return Err(MatchError::InvalidConfig {
                what: "saturation_band_k must be positive and finite",
            });
        }
        if self.catalog.is_empty() {
            return Err(MatchError::InvalidConfig {
                what: "catalog must list at least one refrigerant",
            });
        }
        Ok(())
    }

    pub fn from_yaml_str(content: &str) -> MatchResult<Self> {
        let config: MatcherConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> MatchResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

pub fn load_config(path: &Path) -> MatchResult<MatcherConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| MatchError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    MatcherConfig::from_yaml_str(&content)
}
