//! Error types for the catalint library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for catalint operations.
///
/// Detection and spellcheck never surface these to callers: oracle failures
/// are absorbed by the orchestration layer. Only construction-time work
/// (loading dictionary files, building an HTTP oracle) returns them.
#[derive(Debug, Error)]
pub enum CatalintError {
    /// Network, authentication or HTTP-status failure calling the oracle.
    #[error("Oracle transport error: {0}")]
    OracleTransport(String),

    /// The oracle answered, but the payload could not be parsed.
    #[error("Oracle returned a malformed response: {0}")]
    OracleMalformedResponse(String),

    /// Error reading a dictionary extension file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalintError {
    /// Whether this error came from the oracle collaborator.
    ///
    /// Transport and parse failures are treated identically: both trigger
    /// rule fallback for artist detection and count as "no issues" for the
    /// AI spellcheck source.
    pub fn is_oracle_failure(&self) -> bool {
        matches!(
            self,
            CatalintError::OracleTransport(_) | CatalintError::OracleMalformedResponse(_)
        )
    }
}

/// Result type alias for catalint operations.
pub type Result<T> = std::result::Result<T, CatalintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_failure_classification() {
        assert!(CatalintError::OracleTransport("timeout".into()).is_oracle_failure());
        assert!(CatalintError::OracleMalformedResponse("eof".into()).is_oracle_failure());
        assert!(!CatalintError::Config("missing key".into()).is_oracle_failure());
    }
}
