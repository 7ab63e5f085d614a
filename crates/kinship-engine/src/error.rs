//! Engine error types
//!
//! Classification itself never fails; these cover loading snapshots and
//! configuration.

use thiserror::Error;

/// Errors that can occur while preparing engine input
#[derive(Error, Debug)]
pub enum KinshipError {
    /// Snapshot JSON could not be parsed
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
