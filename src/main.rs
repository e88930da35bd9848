//! envprobe CLI
//!
//! Usage: envprobe [--json | --format <FORMAT>] [--var <NAME>]... [-v]
//!
//! With no arguments prints:
//!   REPO_ROOT=<value>
//!   BUNDLE_ROOT=<value>
//!   PYTHON_VAR=<value>

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use envprobe::presentation::{run, Cli};
use envprobe::{ProbeError, ProcessEnv};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match probe(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let usage = err
                .downcast_ref::<ProbeError>()
                .is_some_and(ProbeError::is_usage);
            if usage {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn probe(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(cli, &ProcessEnv::new(), &mut out, io::stderr()) {
        Err(err) if err.is_usage() => Err(err.into()),
        other => other.context("failed to write probe report"),
    }
}
