//! Output formatting for human and JSON modes
//!
//! Human mode writes the bare verdict token (`DA` or `NE`) with no trailing
//! newline. JSON mode writes a pretty-printed [`CheckReport`]. Negative input
//! has no report, so nothing is written in either mode.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::core::models::{DigitTriple, Verdict};
use crate::core::services;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Bare verdict token (default)
    #[default]
    Human,
    /// JSON report (machine-readable)
    Json,
}

/// Result of checking one integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// The integer under test
    pub input: i64,
    /// Its ones, tens and hundreds digits
    pub digits: DigitTriple,
    /// Sum of the cubes of `digits`
    pub sum_of_cubes: i64,
    /// Whether `input == sum_of_cubes`
    pub armstrong: bool,
    /// The verdict token, `DA` or `NE`
    pub token: &'static str,
}

impl CheckReport {
    /// Check `value`, returning `None` for negative input
    #[must_use]
    pub fn evaluate(value: i64) -> Option<Self> {
        services::evaluate(value)
            .map(|verdict| Self::new(value, DigitTriple::from_value(value), verdict))
    }

    fn new(input: i64, digits: DigitTriple, verdict: Verdict) -> Self {
        Self {
            input,
            digits,
            sum_of_cubes: digits.sum_of_cubes(),
            armstrong: verdict.is_match(),
            token: verdict.token(),
        }
    }

    /// Render the report based on output mode
    pub fn render<W: Write>(&self, mode: OutputMode, out: &mut W) -> io::Result<()> {
        match mode {
            OutputMode::Human => self.render_human(out),
            OutputMode::Json => self.render_json(out),
        }
    }

    fn render_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.token.as_bytes())
    }

    fn render_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::from)?;
        writeln!(out, "{json}")
    }
}

/// Check `value` and render the verdict, writing nothing for negative input
pub fn write_verdict<W: Write>(value: i64, mode: OutputMode, out: &mut W) -> io::Result<()> {
    if let Some(report) = CheckReport::evaluate(value) {
        report.render(mode, out)?;
    }
    out.flush()
}
