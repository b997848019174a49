// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Nohush Contributors

//! Tool identifiers and the extension applicability table.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::scan::SyntaxMode;

/// Extensions scanned with the C-family segmenter and targeted by the clang
/// tools.
const C_EXTENSIONS: &[&str] = &["c", "cc", "cpp", "cxx", "h", "hh", "hpp", "hxx"];

/// A tool whose inline suppression syntax is recognized.
///
/// Declaration order is registry order: findings on one line are emitted in
/// this order, and `ToolSet` iteration follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolId {
    Yamllint,
    Pylint,
    Mypy,
    ClangTidy,
    ClangFormat,
    ClangDiagnostic,
}

impl ToolId {
    /// Every recognized tool, in registry order.
    pub const ALL: [ToolId; 6] = [
        ToolId::Yamllint,
        ToolId::Pylint,
        ToolId::Mypy,
        ToolId::ClangTidy,
        ToolId::ClangFormat,
        ToolId::ClangDiagnostic,
    ];

    /// Canonical kebab-case name, as accepted by `--tools`.
    pub fn as_str(self) -> &'static str {
        match self {
            ToolId::Yamllint => "yamllint",
            ToolId::Pylint => "pylint",
            ToolId::Mypy => "mypy",
            ToolId::ClangTidy => "clang-tidy",
            ToolId::ClangFormat => "clang-format",
            ToolId::ClangDiagnostic => "clang-diagnostic",
        }
    }

    /// File extensions this tool applies to.
    ///
    /// Applicability lives in the CLI layer, not the scanner: `scan_file`
    /// checks whatever tool set it is handed.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ToolId::Yamllint => &["yaml", "yml"],
            ToolId::Pylint => &["py"],
            ToolId::Mypy => &["py", "pyi"],
            ToolId::ClangTidy | ToolId::ClangFormat | ToolId::ClangDiagnostic => C_EXTENSIONS,
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "yamllint" => Ok(ToolId::Yamllint),
            "pylint" => Ok(ToolId::Pylint),
            "mypy" => Ok(ToolId::Mypy),
            "clang-tidy" => Ok(ToolId::ClangTidy),
            "clang-format" => Ok(ToolId::ClangFormat),
            "clang-diagnostic" => Ok(ToolId::ClangDiagnostic),
            other => Err(Error::UnknownTool(other.to_string())),
        }
    }
}

/// The segmenter mode a file extension selects.
pub fn syntax_mode_for_extension(ext: &str) -> SyntaxMode {
    if C_EXTENSIONS.contains(&ext) {
        SyntaxMode::CFamily
    } else {
        SyntaxMode::Hash
    }
}

/// The set of tools requested for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolSet {
    tools: BTreeSet<ToolId>,
}

impl ToolSet {
    /// All recognized tools.
    pub fn all() -> Self {
        Self {
            tools: ToolId::ALL.into_iter().collect(),
        }
    }

    /// Parse a comma-separated tool list (the `--tools` argument).
    ///
    /// Empty segments are ignored; an empty result or an unknown name is a
    /// usage error surfaced before any scanning starts.
    pub fn from_spec(spec: &str) -> Result<Self> {
        let mut tools = BTreeSet::new();
        for name in spec.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            tools.insert(name.parse::<ToolId>()?);
        }
        if tools.is_empty() {
            return Err(Error::Argument(format!("no tools specified: {spec:?}")));
        }
        Ok(Self { tools })
    }

    pub fn contains(&self, tool: ToolId) -> bool {
        self.tools.contains(&tool)
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Iterate in registry order (`ToolId` declaration order).
    pub fn iter(&self) -> impl Iterator<Item = ToolId> + '_ {
        self.tools.iter().copied()
    }

    /// Tool names sorted alphabetically, for progress output.
    pub fn names_alphabetical(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.tools.iter().map(|t| t.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// The subset applicable to files with the given extension.
    pub fn applicable_to(&self, ext: &str) -> ToolSet {
        Self {
            tools: self
                .tools
                .iter()
                .copied()
                .filter(|t| t.extensions().contains(&ext))
                .collect(),
        }
    }
}

impl FromIterator<ToolId> for ToolSet {
    fn from_iter<I: IntoIterator<Item = ToolId>>(iter: I) -> Self {
        Self {
            tools: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
