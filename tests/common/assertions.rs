//! Custom assertion macros for CLI tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that stdout is exactly the given lines, each newline-terminated.
///
/// # Example
/// ```ignore
/// assert_lines!(result, ["REPO_ROOT=", "BUNDLE_ROOT=", "PYTHON_VAR="]);
/// ```
#[macro_export]
macro_rules! assert_lines {
    ($result:expr, [$($line:expr),* $(,)?]) => {
        let expected: String = [$($line),*].iter().map(|l| format!("{}\n", l)).collect();
        assert_eq!(
            $result.stdout, expected,
            "stdout did not match.\nstderr:\n{}",
            $result.stderr
        );
    };
}

/// Assert that stdout or stderr contains the expected text.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Did you mean");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $expected:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($expected),
            "Expected output to contain '{}'\n\
             Actual stdout:\n{}\n\
             Actual stderr:\n{}",
            $expected,
            $result.stdout,
            $result.stderr
        );
    };
}
