//! VarName value object - a name that can be looked up in an environment
//!
//! Rejects names the host environment can never bind: empty names, names
//! containing `=` (the key/value separator) and names containing NUL.

use std::fmt;

use serde::Serialize;

use crate::error::{ProbeError, ProbeResult};

/// Repository root injected by the build runner
pub const REPO_ROOT: &str = "REPO_ROOT";
/// Bundle root (repository root joined with the bundle path)
pub const BUNDLE_ROOT: &str = "BUNDLE_ROOT";
/// Bundle-specific variable of the Python sample bundle
pub const PYTHON_VAR: &str = "PYTHON_VAR";

/// Names printed by every invocation, in output order
pub const DEFAULT_VARS: [&str; 3] = [REPO_ROOT, BUNDLE_ROOT, PYTHON_VAR];

/// Validated environment variable name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VarName(String);

impl VarName {
    /// Validate and wrap a name
    pub fn new(name: impl Into<String>) -> ProbeResult<Self> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("must not be empty")
        } else if name.contains('=') {
            Some("must not contain '='")
        } else if name.contains('\0') {
            Some("must not contain NUL")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ProbeError::InvalidVarName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    /// The three names every probe prints
    pub fn defaults() -> Vec<Self> {
        DEFAULT_VARS
            .iter()
            .map(|name| Self((*name).to_string()))
            .collect()
    }

    /// Parse a comma-separated list, skipping blank entries
    ///
    /// `"GO_VAR, TS_VAR,"` yields `GO_VAR` and `TS_VAR`.
    pub fn parse_list(list: &str) -> ProbeResult<Vec<Self>> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::new)
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for VarName {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
