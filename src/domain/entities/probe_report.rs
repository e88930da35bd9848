//! Probe results
//!
//! A `ProbeReport` keeps bindings in the order the names were requested;
//! renderers rely on that order.

use serde::Serialize;

use crate::domain::value_objects::VarName;

/// One looked-up variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvBinding {
    pub name: VarName,
    /// Bound value, or the empty string when unset
    pub value: String,
    #[serde(rename = "set")]
    pub is_set: bool,
}

impl EnvBinding {
    /// Binding for a variable that has a value (possibly empty)
    pub fn set(name: VarName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            is_set: true,
        }
    }

    /// Binding for an unset variable; prints as an empty value
    pub fn unset(name: VarName) -> Self {
        Self {
            name,
            value: String::new(),
            is_set: false,
        }
    }

    /// `NAME=value`, value verbatim
    pub fn line(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

/// All bindings of one probe run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    bindings: Vec<EnvBinding>,
}

impl ProbeReport {
    pub fn new(bindings: Vec<EnvBinding>) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &[EnvBinding] {
        &self.bindings
    }

    /// Bindings whose variable was not set
    pub fn unset(&self) -> impl Iterator<Item = &EnvBinding> {
        self.bindings.iter().filter(|b| !b.is_set)
    }
}
