// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Nohush Contributors

//! Per-tool directive patterns (suppressions only).
//!
//! Patterns are ordered by specificity: suffixed forms before the bare form,
//! so a `disable-next` occurrence is never reported as a bare `disable`.
//! Evaluation stops at the first hit, which stands in for the negative
//! lookahead the `regex` crate does not support. Every pattern is
//! case-insensitive and tolerates runs of horizontal whitespace around its
//! separators. Re-enable counterparts (`enable`, `NOLINTEND`,
//! `clang-format on`, pragma `push`/`pop`) are deliberately absent.

use std::sync::LazyLock;

use regex::Regex;

use crate::scan::SegmentedLine;
use crate::tool::ToolId;

/// Which part of a segmented line a tool's patterns run against.
///
/// Everything matches comment text except the clang diagnostic pragma, which
/// is source text: a pragma quoted inside a comment or string literal is
/// inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchChannel {
    Comment,
    Code,
}

/// One recognized suppression form.
pub struct DirectivePattern {
    pub regex: Regex,
    /// Canonical label reported for this form.
    pub label: &'static str,
}

/// A tool's ordered pattern list.
pub struct ToolPatterns {
    pub channel: MatchChannel,
    pub patterns: Vec<DirectivePattern>,
}

#[allow(clippy::expect_used)]
fn pattern(re: &str, label: &'static str) -> DirectivePattern {
    DirectivePattern {
        regex: Regex::new(re).expect("valid directive pattern"),
        label,
    }
}

static YAMLLINT: LazyLock<ToolPatterns> = LazyLock::new(|| ToolPatterns {
    channel: MatchChannel::Comment,
    patterns: vec![
        pattern(r"(?i)yamllint[ \t]+disable-line", "yamllint disable-line"),
        pattern(r"(?i)yamllint[ \t]+disable-file", "yamllint disable-file"),
        // Bare form: `[^-]|$` keeps `disable-whatever` from matching here.
        pattern(r"(?i)yamllint[ \t]+disable(?:[^-]|$)", "yamllint disable"),
    ],
});

static PYLINT: LazyLock<ToolPatterns> = LazyLock::new(|| ToolPatterns {
    channel: MatchChannel::Comment,
    patterns: vec![
        pattern(r"(?i)pylint:[ \t]*disable-next", "pylint: disable-next"),
        pattern(r"(?i)pylint:[ \t]*disable-line", "pylint: disable-line"),
        pattern(r"(?i)pylint:[ \t]*skip-file", "pylint: skip-file"),
        pattern(r"(?i)pylint:[ \t]*disable(?:[^-]|$)", "pylint: disable"),
    ],
});

static MYPY: LazyLock<ToolPatterns> = LazyLock::new(|| ToolPatterns {
    channel: MatchChannel::Comment,
    patterns: vec![
        // The optional bracketed code list needs no handling: the prefix
        // alone identifies the directive and payloads are not validated.
        pattern(r"(?i)type:[ \t]*ignore", "type: ignore"),
        pattern(r"(?i)mypy:[ \t]*ignore-errors", "mypy: ignore-errors"),
    ],
});

static CLANG_TIDY: LazyLock<ToolPatterns> = LazyLock::new(|| ToolPatterns {
    channel: MatchChannel::Comment,
    patterns: vec![
        pattern(r"(?i)nolintnextline", "NOLINTNEXTLINE"),
        pattern(r"(?i)nolintbegin", "NOLINTBEGIN"),
        // `[^a-zA-Z]|$` keeps NOLINTEND out of the bare form.
        pattern(r"(?i)nolint(?:[^a-zA-Z]|$)", "NOLINT"),
    ],
});

static CLANG_FORMAT: LazyLock<ToolPatterns> = LazyLock::new(|| ToolPatterns {
    channel: MatchChannel::Comment,
    patterns: vec![pattern(r"(?i)clang-format[ \t]+off", "clang-format off")],
});

static CLANG_DIAGNOSTIC: LazyLock<ToolPatterns> = LazyLock::new(|| ToolPatterns {
    channel: MatchChannel::Code,
    patterns: vec![pattern(
        r"(?i)#[ \t]*pragma[ \t]+clang[ \t]+diagnostic[ \t]+ignored",
        "#pragma clang diagnostic ignored",
    )],
});

/// The ordered pattern list for one tool.
pub fn patterns_for(tool: ToolId) -> &'static ToolPatterns {
    match tool {
        ToolId::Yamllint => &YAMLLINT,
        ToolId::Pylint => &PYLINT,
        ToolId::Mypy => &MYPY,
        ToolId::ClangTidy => &CLANG_TIDY,
        ToolId::ClangFormat => &CLANG_FORMAT,
        ToolId::ClangDiagnostic => &CLANG_DIAGNOSTIC,
    }
}

/// The text channel a tool matches against.
pub fn channel_text<'a>(tool: ToolId, segments: &'a SegmentedLine) -> &'a str {
    match patterns_for(tool).channel {
        MatchChannel::Comment => &segments.comment,
        MatchChannel::Code => &segments.code,
    }
}

/// Match one tool's patterns in priority order.
///
/// Returns the winning label and the byte offset of the match, or `None`.
pub fn match_tool(tool: ToolId, segments: &SegmentedLine) -> Option<(&'static str, usize)> {
    let text = channel_text(tool, segments);
    for p in &patterns_for(tool).patterns {
        if let Some(m) = p.regex.find(text) {
            return Some((p.label, m.start()));
        }
    }
    None
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
