//! Error types for envprobe
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use thiserror::Error;

/// Result type alias for envprobe operations
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Main error type for envprobe operations
#[derive(Error, Debug)]
pub enum ProbeError {
    /// A requested variable name cannot be looked up in an environment
    #[error("invalid variable name '{name}': {reason}")]
    InvalidVarName { name: String, reason: &'static str },

    /// Writing the report failed (usually a closed or full stdout)
    ///
    /// The cause is reported through `source()`, not the message, so `{:#}`
    /// chains print it once.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),
}

impl ProbeError {
    /// Whether the error comes from how the probe was invoked rather than
    /// from the environment it ran in.
    pub fn is_usage(&self) -> bool {
        matches!(self, ProbeError::InvalidVarName { .. })
    }
}
