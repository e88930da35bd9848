//! Probe Use Case
//!
//! Looks up each requested name, in order, in an environment source.

mod options;
mod use_case;

pub use options::ProbeOptions;
pub use use_case::ProbeUseCase;
