//! Configuration types

use crate::domain::value_objects::VarName;

/// How the report is written to stdout
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `NAME=value` lines
    #[default]
    Text,
    /// One NDJSON event line
    Json,
}

impl OutputFormat {
    pub const VALID_VALUES: &'static [&'static str] = &["text", "json"];

    /// Case-insensitive parse of an environment value
    pub fn parse_env(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Diagnostic verbosity on stderr; never affects stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Map a `-v` count
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Resolved probe configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeConfig {
    pub format: OutputFormat,
    /// Names printed after the default three
    pub extra_vars: Vec<VarName>,
    pub verbosity: Verbosity,
}

impl ProbeConfig {
    /// Apply CLI flags on top of this configuration
    ///
    /// `--var` replaces names from `ENVPROBE_VARS` rather than adding to them.
    pub fn with_cli_overrides(
        mut self,
        format: Option<OutputFormat>,
        vars: Vec<VarName>,
        verbose: u8,
    ) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if !vars.is_empty() {
            self.extra_vars = vars;
        }
        self.verbosity = self.verbosity.max(Verbosity::from_count(verbose));
        self
    }
}
