//! Error types for building and loading regression reports
//!
//! Classification itself never fails. Errors only arise at the edges:
//! reading measurement files, validating entries and thresholds, and turning
//! loosely-shaped JSON back into comparison results.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a regression report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid entry '{name}': {reason}")]
    InvalidEntry { name: String, reason: String },

    #[error("Duplicate entry '{name}' in {side} data")]
    DuplicateEntry { name: String, side: &'static str },

    #[error("Malformed comparison '{name}': {reason}")]
    MalformedComparison { name: String, reason: String },

    #[error("Invalid compare configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse entry on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub fn invalid_entry<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        ReportError::InvalidEntry {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        ReportError::MalformedComparison {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
