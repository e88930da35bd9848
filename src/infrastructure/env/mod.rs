//! Environment sources
//!
//! - `ProcessEnv` - reads the real process environment
//! - `MemoryEnv` - fixed bindings, never touches the process environment

mod memory;
mod process;

pub use memory::MemoryEnv;
pub use process::ProcessEnv;
