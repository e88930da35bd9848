//! Process Environment Implementation
//!
//! Implements the EnvSource port over `std::env`.

use crate::domain::ports::EnvSource;

/// The environment this process was started with
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Create a new ProcessEnv instance
    pub fn new() -> Self {
        Self
    }
}

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        // var_os keeps non-Unicode values instead of reporting them as unset
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}
