//! Application Layer
//!
//! Use cases that orchestrate the probe flow.
//!
//! ## Use Cases
//!
//! - `ProbeUseCase` - Look up the default and extra variable names in order

pub mod probe;

pub use probe::{ProbeOptions, ProbeUseCase};
