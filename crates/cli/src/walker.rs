// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Nohush Contributors

//! File discovery: recursive directory walking plus exclusion globs.
//!
//! Directories are traversed with the `ignore` crate so gitignored and
//! hidden files stay out of CI noise; explicitly named files are taken as
//! given (a missing one surfaces as a read error later, not here).
//! `--exclude` globs are fnmatch-style and apply to walked and explicitly
//! named files alike.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::error::{Error, Result};

/// Default maximum directory depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Directories to skip entirely during walking.
const SKIP_DIRECTORIES: &[&str] = &["node_modules", ".git"];

pub struct FileWalker {
    excludes: GlobSet,
    max_depth: usize,
}

impl FileWalker {
    /// Build a walker with compiled exclusion globs.
    pub fn new(exclude_patterns: &[String], max_depth: usize) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pat in exclude_patterns {
            let glob = GlobBuilder::new(pat)
                .literal_separator(false)
                .build()
                .map_err(|e| Error::Argument(format!("invalid exclude pattern {pat:?}: {e}")))?;
            builder.add(glob);
        }
        let excludes = builder
            .build()
            .map_err(|e| Error::Argument(format!("invalid exclude patterns: {e}")))?;
        Ok(Self {
            excludes,
            max_depth,
        })
    }

    /// Expand path arguments into a sorted, deduplicated list of candidate
    /// files.
    pub fn collect(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for path in paths {
            if path.is_dir() {
                self.walk_dir(path, &mut files);
            } else {
                files.push(path.clone());
            }
        }
        files.retain(|p| !self.is_excluded(p));
        files.sort();
        files.dedup();
        files
    }

    fn walk_dir(&self, root: &Path, out: &mut Vec<PathBuf>) {
        let walker = WalkBuilder::new(root)
            .max_depth(Some(self.max_depth))
            .follow_links(true)
            .filter_entry(|entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !is_dir
                    || !entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| SKIP_DIRECTORIES.contains(&name))
            })
            .build();

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|t| t.is_file()) {
                        out.push(entry.into_path());
                    }
                }
                Err(err) => tracing::warn!("walk error: {err}"),
            }
        }
    }

    /// Exclusion globs are tested against the full path and the bare file
    /// name, mirroring fnmatch semantics.
    fn is_excluded(&self, path: &Path) -> bool {
        if self.excludes.is_empty() {
            return false;
        }
        if self.excludes.is_match(path) {
            return true;
        }
        path.file_name()
            .is_some_and(|name| self.excludes.is_match(Path::new(name)))
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
