//! EnvSource port - read-only access to an environment
//!
//! Lookup is total: a missing variable is `None`, never an error.
//!
//! Implementations:
//! - `ProcessEnv` - the environment the process was started with
//! - `MemoryEnv` - fixed bindings for tests

/// Abstract environment lookup
pub trait EnvSource {
    /// Value bound to `name`, or `None` when unset
    ///
    /// Values that are not valid Unicode are converted lossily.
    fn get(&self, name: &str) -> Option<String>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}
