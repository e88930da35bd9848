//! Domain Layer
//!
//! Pure probe logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Probe results (EnvBinding, ProbeReport)
//! - `value_objects/` - Immutable value types (VarName)
//! - `ports/` - Interface definitions for infrastructure (EnvSource)
//!
//! The domain never reads the process environment directly; every lookup
//! goes through the `EnvSource` port.

pub mod entities;
pub mod ports;
pub mod value_objects;
