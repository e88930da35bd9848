//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod var_name;

pub use var_name::{VarName, BUNDLE_ROOT, DEFAULT_VARS, PYTHON_VAR, REPO_ROOT};
