//! CLI Argument Parsing
//!
//! Invoked with no arguments the probe prints the three default variables as
//! `NAME=value` lines. Every flag is optional.

use clap::Parser;

use crate::config::OutputFormat;
use crate::domain::value_objects::VarName;
use crate::error::ProbeResult;

/// One `--var` occurrence, split with the same rules as `ENVPROBE_VARS`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarList(Vec<VarName>);

fn parse_var_list(s: &str) -> ProbeResult<VarList> {
    VarName::parse_list(s).map(VarList)
}

/// envprobe - print the environment a bundle was launched with
#[derive(Parser, Debug)]
#[command(name = "envprobe")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Prints REPO_ROOT, BUNDLE_ROOT and PYTHON_VAR as NAME=value lines. Unset variables print as empty values."
)]
pub struct Cli {
    /// Output one JSON event instead of NAME=value lines
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Output format [env: ENVPROBE_FORMAT]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Extra variable to print after the defaults (repeatable, comma-separated) [env: ENVPROBE_VARS]
    #[arg(long = "var", value_name = "NAME", value_parser = parse_var_list)]
    pub vars: Vec<VarList>,

    /// Verbosity level (-v, -vv) for diagnostics on stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Format requested on the command line, if any
    pub fn requested_format(&self) -> Option<OutputFormat> {
        if self.json {
            Some(OutputFormat::Json)
        } else {
            self.format
        }
    }

    /// Every `--var` name in command-line order
    pub fn requested_vars(&self) -> Vec<VarName> {
        self.vars.iter().flat_map(|list| list.0.iter().cloned()).collect()
    }
}
