// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Nohush Contributors

//! Text output formatter.
//!
//! One finding per line in the canonical rendering:
//! ```text
//! <path>:<line>:<tool>:<directive>
//! ```

use std::io::Write;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::scheme;
use crate::scan::Finding;

/// Text output formatter with color support.
pub struct TextFormatter {
    stdout: StandardStream,
}

impl TextFormatter {
    pub fn new(color_choice: ColorChoice) -> Self {
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }

    /// Write one finding (streaming).
    pub fn write_finding(&mut self, finding: &Finding) -> std::io::Result<()> {
        self.stdout.set_color(&scheme::path())?;
        write!(self.stdout, "{}", finding.path)?;
        self.stdout.reset()?;

        write!(self.stdout, ":")?;
        self.stdout.set_color(&scheme::line_number())?;
        write!(self.stdout, "{}", finding.line)?;
        self.stdout.reset()?;

        writeln!(self.stdout, ":{}:{}", finding.tool, finding.directive)
    }

    /// Write every finding in order.
    pub fn write_all(&mut self, findings: &[Finding]) -> std::io::Result<()> {
        for finding in findings {
            self.write_finding(finding)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
