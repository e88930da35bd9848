//! Environment overrides (ENVPROBE_* prefix)

use std::io::Write;

use crate::domain::ports::EnvSource;
use crate::domain::value_objects::VarName;
use crate::error::ProbeResult;

use super::env_validator::EnvVarValidator;
use super::types::{OutputFormat, ProbeConfig};

/// Output format override: `text` or `json`
pub const ENV_FORMAT: &str = "ENVPROBE_FORMAT";
/// Extra names, comma-separated
pub const ENV_VARS: &str = "ENVPROBE_VARS";

/// Apply `ENVPROBE_*` overrides read from `env`
///
/// An unrecognized `ENVPROBE_FORMAT` warns on `warnings` and keeps the
/// current format. An invalid name in `ENVPROBE_VARS` is an error, the same
/// as an invalid `--var`.
pub fn with_env_overrides<E, W>(
    mut config: ProbeConfig,
    env: &E,
    warnings: &mut W,
) -> ProbeResult<ProbeConfig>
where
    E: EnvSource + ?Sized,
    W: Write,
{
    // ENVPROBE_FORMAT
    if let Some(format) = env.get(ENV_FORMAT) {
        let validator = EnvVarValidator::new(ENV_FORMAT, OutputFormat::VALID_VALUES);
        config.format =
            validator.parse_with_writer(&format, OutputFormat::parse_env, config.format, warnings);
    }

    // ENVPROBE_VARS (comma-separated)
    if let Some(vars) = env.get(ENV_VARS) {
        config.extra_vars = VarName::parse_list(&vars)?;
    }

    Ok(config)
}
