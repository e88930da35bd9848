//! Configuration module for envprobe
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ENVPROBE_*)
//! 3. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::EnvVarValidator;
pub use loader::{with_env_overrides, ENV_FORMAT, ENV_VARS};
pub use types::{OutputFormat, ProbeConfig, Verbosity};
