#![allow(dead_code)]

//! Test environment builder for isolated probe runs.
//!
//! Every run starts from the parent environment with all probed and
//! `ENVPROBE_*` variables removed, so the developer's shell can't leak into
//! assertions. Variables are then set explicitly per test.

use std::process::{Command, Output};

/// Variables removed before every run
const ISOLATED_VARS: &[&str] = &[
    "REPO_ROOT",
    "BUNDLE_ROOT",
    "PYTHON_VAR",
    "GO_VAR",
    "TS_VAR",
    "ENVPROBE_FORMAT",
    "ENVPROBE_VARS",
];

/// Result of running the probe binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Controlled environment for one or more probe runs
pub struct TestEnv {
    vars: Vec<(String, String)>,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Environment with none of the probed variables set
    pub fn empty() -> Self {
        Self::builder().build()
    }

    /// Run the probe with arguments
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the probe with arguments and extra variables for this run only
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        run_command(cmd)
    }

    /// Isolated command, for tests that need raw OS values or redirected stdio
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_envprobe"));
        cmd.args(args);

        for key in ISOLATED_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in &self.vars {
            cmd.env(key, value);
        }
        cmd
    }
}

/// Execute a command built by `TestEnv::command`
pub fn run_command(mut cmd: Command) -> TestResult {
    let output = cmd.output().expect("Failed to execute envprobe");
    output_to_result(output)
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    vars: Vec<(String, String)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable for every run
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.push((key.to_string(), value.to_string()));
        self
    }

    /// Set the variables a build runner injects for a bundle
    pub fn with_bundle(self, repo_root: &str, bundle_path: &str) -> Self {
        let bundle_root = format!("{}/{}", repo_root.trim_end_matches('/'), bundle_path);
        self.with_var("REPO_ROOT", repo_root)
            .with_var("BUNDLE_ROOT", &bundle_root)
    }

    pub fn build(self) -> TestEnv {
        TestEnv { vars: self.vars }
    }
}
