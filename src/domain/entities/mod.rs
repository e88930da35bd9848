//! Domain Entities
//!
//! - `EnvBinding` - One looked-up variable and its value
//! - `ProbeReport` - All bindings in probe order

mod probe_report;

pub use probe_report::{EnvBinding, ProbeReport};
