// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Nohush Contributors

//! JSON output formatter.
//!
//! Emits the findings as a single-line array of objects with the same four
//! fields as the text rendering: path, line, tool, directive.

use std::io::Write;

use crate::scan::Finding;

/// Write all findings as a JSON array followed by a newline.
pub fn write_findings<W: Write>(writer: &mut W, findings: &[Finding]) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, findings).map_err(std::io::Error::from)?;
    writeln!(writer)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
