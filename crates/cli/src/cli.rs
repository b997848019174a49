// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Nohush Contributors

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::walker::DEFAULT_MAX_DEPTH;

/// Assert that source files contain no inline lint-suppression directives
#[derive(Parser, Debug)]
#[command(name = "nohush")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").args(["quiet", "count", "json", "verbose"])))]
#[command(group(ArgGroup::new("behavior").args(["fail_fast", "warn_only"])))]
pub struct Cli {
    /// Files or directories to scan (directories are walked recursively)
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Comma-separated tools to check: yamllint, pylint, mypy, clang-tidy,
    /// clang-format, clang-diagnostic (default: all)
    #[arg(long, value_name = "TOOLS")]
    pub tools: Option<String>,

    /// Glob pattern to exclude files (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Allow directives matching this pattern (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub allow: Vec<String>,

    /// Suppress output, exit code only
    #[arg(long)]
    pub quiet: bool,

    /// Print the finding count only
    #[arg(long)]
    pub count: bool,

    /// Output findings as JSON
    #[arg(long)]
    pub json: bool,

    /// Show progress and a summary while scanning
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Stop at the first file with findings
    #[arg(long)]
    pub fail_fast: bool,

    /// Report findings but always exit 0
    #[arg(long)]
    pub warn_only: bool,

    /// Maximum directory depth to traverse
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, value_name = "N")]
    pub max_depth: usize,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,
}

/// How findings are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One canonical `path:line:tool:directive` line per finding.
    #[default]
    Plain,
    Quiet,
    Count,
    Json,
    Verbose,
}

impl Cli {
    /// Resolve the output mode from the mutually exclusive flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.count {
            OutputMode::Count
        } else if self.json {
            OutputMode::Json
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Plain
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
