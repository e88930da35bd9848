//! Output Rendering
//!
//! Renders a `ProbeReport` to stdout in the configured format.

use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::domain::entities::{EnvBinding, ProbeReport};
use crate::error::ProbeResult;

/// Trait for rendering probe reports
pub trait ReportRenderer {
    /// Write the report to `out`
    fn render(&self, report: &ProbeReport, out: &mut dyn Write) -> ProbeResult<()>;
}

/// `NAME=value` lines, value verbatim
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &ProbeReport, out: &mut dyn Write) -> ProbeResult<()> {
        for binding in report.bindings() {
            writeln!(out, "{}", binding.line())?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Single NDJSON event line
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct EnvEvent<'a> {
    event: &'static str,
    vars: &'a [EnvBinding],
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &ProbeReport, out: &mut dyn Write) -> ProbeResult<()> {
        let event = EnvEvent {
            event: "env",
            vars: report.bindings(),
        };
        let line = serde_json::to_string(&event)?;
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
