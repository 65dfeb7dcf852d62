//! Error types for the matcher crate.

use rdna_fluids::FluidError;
use std::path::PathBuf;

/// Errors raised while building inputs for, or reporting on, an identification.
///
/// `identify` itself never fails; every variant here comes from validating a
/// measurement or configuration, or from reading and writing files.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("Invalid measurement: {what}")]
    InvalidMeasurement { what: &'static str },

    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for matcher operations.
pub type MatchResult<T> = Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluid_errors_convert() {
        let err: MatchError = FluidError::InvalidArg { what: "catalog" }.into();
        assert!(matches!(err, MatchError::Fluid(_)));
        assert!(err.to_string().contains("catalog"));
    }

    #[test]
    fn file_read_names_path() {
        let err = MatchError::FileRead {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "nope"),
        };
        assert!(err.to_string().contains("missing.yaml"));
    }
}
