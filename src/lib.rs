//! envprobe - bundle environment probe
//!
//! A build runner launches the probe inside a bundle; the probe prints the
//! variables the runner injected (`REPO_ROOT`, `BUNDLE_ROOT`, `PYTHON_VAR`)
//! as `NAME=value` lines so a test harness can check them.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ProbeOptions, ProbeUseCase};
pub use config::{OutputFormat, ProbeConfig};
pub use domain::entities::{EnvBinding, ProbeReport};
pub use domain::ports::EnvSource;
pub use domain::value_objects::{VarName, DEFAULT_VARS};
pub use error::{ProbeError, ProbeResult};
pub use infrastructure::{MemoryEnv, ProcessEnv};
