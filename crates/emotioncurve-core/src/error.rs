//! Core error types for emotioncurve-core.
//!
//! Every failure is scoped to a single operation: none of these leave the
//! beat store in an inconsistent state.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for emotioncurve-core.
#[derive(Error, Debug)]
pub enum CurveError {
    /// Analysis requested on a curve too short to have pacing.
    #[error("Analysis needs at least {required} beats, curve has {actual}")]
    PreconditionNotMet { required: usize, actual: usize },

    /// The external analysis call failed or returned an unusable payload.
    #[error("Analysis failed: {0}")]
    AnalysisFailed(#[from] AnalysisFailure),

    /// A beat holds a value JSON cannot represent (NaN or infinity).
    #[error("Beat {id} has a non-finite {field}")]
    NonFiniteValue { id: String, field: &'static str },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Credential store errors
    #[error("Credential store error: {0}")]
    Credentials(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a single analysis exchange did not produce a report.
#[derive(Error, Debug)]
pub enum AnalysisFailure {
    /// No API key could be resolved.
    #[error("no API key found (set {env_var} or store one with `auth set-key`)")]
    MissingCredentials { env_var: String },

    /// Connection, TLS or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Service answered but carried no text payload.
    #[error("service returned no content")]
    EmptyResponse,

    /// Payload was not JSON or did not match the report schema.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be determined or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Result type alias for CurveError
pub type Result<T, E = CurveError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_message_mentions_counts() {
        let err = CurveError::PreconditionNotMet {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Analysis needs at least 2 beats, curve has 1"
        );
    }

    #[test]
    fn analysis_failure_converts_into_core_error() {
        let err: CurveError = AnalysisFailure::EmptyResponse.into();
        assert!(matches!(
            err,
            CurveError::AnalysisFailed(AnalysisFailure::EmptyResponse)
        ));
        assert_eq!(err.to_string(), "Analysis failed: service returned no content");
    }
}
