//! Probe runner
//!
//! Resolves configuration, runs the probe and renders the report. Generic
//! over the environment and both output streams so the whole flow can run
//! against a `MemoryEnv` and in-memory buffers.

use std::io::Write;

use crate::application::{ProbeOptions, ProbeUseCase};
use crate::config::{with_env_overrides, ProbeConfig};
use crate::domain::ports::EnvSource;
use crate::error::ProbeResult;

use super::cli::Cli;
use super::diagnostics::Diagnostics;
use super::output::create_renderer;

/// Run one probe: `stdout` receives the report, `stderr` warnings and diagnostics
pub fn run<E, O, D>(cli: &Cli, env: &E, stdout: &mut O, mut stderr: D) -> ProbeResult<()>
where
    E: EnvSource,
    O: Write,
    D: Write,
{
    let config = with_env_overrides(ProbeConfig::default(), env, &mut stderr)?.with_cli_overrides(
        cli.requested_format(),
        cli.requested_vars(),
        cli.verbose,
    );

    let options = ProbeOptions::new().with_extra_vars(config.extra_vars.iter().cloned());
    let mut diagnostics = Diagnostics::new(config.verbosity, &mut stderr);
    let names: Vec<String> = options.names().iter().map(ToString::to_string).collect();
    diagnostics.config(&config, &names);

    let report = ProbeUseCase::new(env).execute(&options);
    diagnostics.report(&report);

    create_renderer(config.format).render(&report, stdout)
}
