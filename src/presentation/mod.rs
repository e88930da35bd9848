//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (text/JSON)
//! - Verbose diagnostics on stderr
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `output` - Report renderers
//! - `diagnostics` - `-v` notes
//! - `runner` - Wires config, use case and renderer together

pub mod cli;
pub mod diagnostics;
pub mod output;
pub mod runner;

pub use cli::Cli;
pub use runner::run;
