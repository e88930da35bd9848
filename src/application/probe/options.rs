//! Probe options

use crate::domain::value_objects::VarName;

/// Options for a probe run
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Names appended after the default three
    pub extra_vars: Vec<VarName>,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeOptions {
    /// Probe only the default names
    pub fn new() -> Self {
        Self {
            extra_vars: Vec::new(),
        }
    }

    /// Append names after the defaults
    pub fn with_extra_vars(mut self, vars: impl IntoIterator<Item = VarName>) -> Self {
        self.extra_vars.extend(vars);
        self
    }

    /// Every name to look up, defaults first
    pub fn names(&self) -> Vec<VarName> {
        let mut names = VarName::defaults();
        names.extend(self.extra_vars.iter().cloned());
        names
    }
}
