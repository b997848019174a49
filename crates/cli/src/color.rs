// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Nohush Contributors

//! Color detection and terminal styling.
//!
//! Resolution order: `--no-color`, `--color`, the `NO_COLOR` environment
//! variable, then TTY detection on stdout.

use std::io::IsTerminal;

use termcolor::{Color, ColorChoice, ColorSpec};

/// Resolve the color choice for stdout from flags and environment.
pub fn resolve_color(force: bool, disable: bool) -> ColorChoice {
    if disable {
        return ColorChoice::Never;
    }
    if force {
        return ColorChoice::Always;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// termcolor ColorSpecs for finding output.
pub mod scheme {
    use super::*;

    /// File paths: cyan.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Line numbers: yellow.
    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
