//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `env/` - Environment sources (Process, Memory)

pub mod env;

pub use env::{MemoryEnv, ProcessEnv};
