// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Nohush Contributors

//! The scanning core: comment-aware segmentation plus directive matching.
//!
//! [`scan_file`] is a pure function of its inputs — no I/O, no logging, no
//! shared state — so callers may scan independent files concurrently.
//! Ordering is guaranteed only within one file's findings: ascending line
//! number, then registry order of tools.

pub mod allow;
pub mod registry;
pub mod segment;

use std::fmt;

use serde::Serialize;

pub use allow::AllowList;
pub use segment::{ScanState, SegmentedLine, SyntaxMode, segment};

use crate::tool::{ToolId, ToolSet};

/// One detected suppression directive.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub path: String,
    /// 1-based line number.
    pub line: u32,
    pub tool: ToolId,
    /// Canonical directive label from the registry.
    pub directive: String,
}

impl fmt::Display for Finding {
    /// Canonical rendering: `path:line:tool:directive`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.path, self.line, self.tool, self.directive
        )
    }
}

/// A per-line match before it becomes a [`Finding`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub tool: ToolId,
    pub label: &'static str,
    /// Channel text from the match onward, trimmed; this is what allow
    /// patterns are tested against.
    pub rendered: String,
}

/// Match one segmented line against every requested tool.
///
/// Returns at most one entry per requested tool, in registry order.
/// Unrequested tools are never evaluated.
pub fn scan_line(segments: &SegmentedLine, tools: &ToolSet) -> Vec<LineMatch> {
    let mut matches = Vec::new();
    for tool in tools.iter() {
        if let Some((label, start)) = registry::match_tool(tool, segments) {
            let text = registry::channel_text(tool, segments);
            matches.push(LineMatch {
                tool,
                label,
                rendered: text[start..].trim().to_string(),
            });
        }
    }
    matches
}

/// Scan one file's content for suppression directives.
pub fn scan_file(
    path: &str,
    content: &str,
    tools: &ToolSet,
    allow: &AllowList,
    mode: SyntaxMode,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut state = ScanState::default();
    for (idx, line) in content.lines().enumerate() {
        let (segments, next_state) = segment(line, state, mode);
        state = next_state;
        for m in scan_line(&segments, tools) {
            if allow.permits(&m.rendered) {
                continue;
            }
            findings.push(Finding {
                path: path.to_string(),
                line: idx as u32 + 1,
                tool: m.tool,
                directive: m.label.to_string(),
            });
        }
    }
    findings
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
