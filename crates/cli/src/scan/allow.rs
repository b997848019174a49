// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Nohush Contributors

//! Allow-pattern filtering.
//!
//! An allow pattern exempts a directive occurrence from reporting. A pattern
//! suppresses a finding when it appears verbatim inside the rendered
//! directive text, or — when it contains glob metacharacters — when it
//! matches the whole rendered text fnmatch-style.

use globset::{GlobBuilder, GlobMatcher};

/// Caller-supplied patterns tested against rendered directive text.
#[derive(Debug, Default)]
pub struct AllowList {
    patterns: Vec<AllowPattern>,
}

#[derive(Debug)]
struct AllowPattern {
    raw: String,
    glob: Option<GlobMatcher>,
}

impl AllowList {
    /// Compile the given patterns. Invalid globs degrade to substring-only
    /// matching rather than failing the run.
    pub fn new(patterns: &[String]) -> Self {
        let patterns = patterns
            .iter()
            .map(|raw| {
                let glob = if raw.contains(['*', '?', '[']) {
                    GlobBuilder::new(raw)
                        .literal_separator(false)
                        .build()
                        .ok()
                        .map(|g| g.compile_matcher())
                } else {
                    None
                };
                AllowPattern {
                    raw: raw.clone(),
                    glob,
                }
            })
            .collect();
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True if `rendered` matches any allow pattern.
    pub fn permits(&self, rendered: &str) -> bool {
        self.patterns.iter().any(|p| {
            rendered.contains(p.raw.as_str())
                || p.glob.as_ref().is_some_and(|g| g.is_match(rendered))
        })
    }
}

#[cfg(test)]
#[path = "allow_tests.rs"]
mod tests;
