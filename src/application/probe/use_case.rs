//! Probe use case

use crate::domain::entities::{EnvBinding, ProbeReport};
use crate::domain::ports::EnvSource;

use super::options::ProbeOptions;

/// Probe use case - snapshots the requested variables of an environment
pub struct ProbeUseCase<E>
where
    E: EnvSource,
{
    env: E,
}

impl<E> ProbeUseCase<E>
where
    E: EnvSource,
{
    /// Create a new probe use case
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Look up every requested name
    ///
    /// Never fails: an unset variable becomes an empty, unset binding.
    pub fn execute(&self, options: &ProbeOptions) -> ProbeReport {
        let bindings = options
            .names()
            .into_iter()
            .map(|name| match self.env.get(name.as_str()) {
                Some(value) => EnvBinding::set(name, value),
                None => EnvBinding::unset(name),
            })
            .collect();

        ProbeReport::new(bindings)
    }
}
