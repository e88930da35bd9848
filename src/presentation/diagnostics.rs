//! Verbose diagnostics on stderr
//!
//! Gated by the `-v` count. Diagnostics never touch stdout, so the
//! `NAME=value` contract holds at every verbosity.

use std::io::Write;

use crate::config::{ProbeConfig, Verbosity};
use crate::domain::entities::ProbeReport;

pub struct Diagnostics<W: Write> {
    verbosity: Verbosity,
    out: W,
}

impl<W: Write> Diagnostics<W> {
    pub fn new(verbosity: Verbosity, out: W) -> Self {
        Self { verbosity, out }
    }

    /// `-vv`: resolved configuration
    pub fn config(&mut self, config: &ProbeConfig, names: &[String]) {
        if self.verbosity >= Verbosity::Debug {
            let _ = writeln!(self.out, "debug: output format: {}", config.format);
            let _ = writeln!(self.out, "debug: probing: {}", names.join(", "));
        }
    }

    /// `-v`: one note per unset variable
    pub fn report(&mut self, report: &ProbeReport) {
        if self.verbosity < Verbosity::Verbose {
            return;
        }
        for binding in report.unset() {
            let _ = writeln!(
                self.out,
                "note: {} is not set; printing empty value",
                binding.name
            );
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
