// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Nohush Contributors

//! Scan command implementation.
//!
//! Owns everything the scanning core does not: file discovery, extension
//! applicability, reading, parallelism, output, and exit-code selection.

use std::path::PathBuf;

use rayon::prelude::*;

use nohush::cli::{Cli, OutputMode};
use nohush::color::resolve_color;
use nohush::error::{Error, ExitCode};
use nohush::output::json;
use nohush::output::text::TextFormatter;
use nohush::scan::{AllowList, Finding, SyntaxMode, scan_file};
use nohush::tool::{ToolSet, syntax_mode_for_extension};
use nohush::walker::FileWalker;

/// One file queued for scanning, with the applicable tool subset and
/// segmenter mode resolved from its extension.
struct FileJob {
    path: PathBuf,
    tools: ToolSet,
    mode: SyntaxMode,
}

/// Run the scan command.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let tools = match &cli.tools {
        Some(spec) => ToolSet::from_spec(spec)?,
        None => ToolSet::all(),
    };

    let walker = FileWalker::new(&cli.exclude, cli.max_depth)?;
    let allow = AllowList::new(&cli.allow);
    let jobs = build_jobs(walker.collect(&cli.paths), &tools);

    tracing::debug!("{} file(s) queued", jobs.len());

    let mode = cli.output_mode();
    let mut text = TextFormatter::new(resolve_color(cli.color, cli.no_color));

    if mode == OutputMode::Verbose {
        println!("Checking for: {}", tools.names_alphabetical().join(", "));
    }

    if cli.fail_fast {
        return run_fail_fast(&jobs, &allow, mode, &mut text);
    }

    // Independent files scan in parallel; the order-preserving collect keeps
    // output deterministic.
    let results: Vec<nohush::Result<Vec<Finding>>> =
        jobs.par_iter().map(|job| scan_job(job, &allow)).collect();

    let mut findings = Vec::new();
    let mut files_scanned = 0usize;
    let mut had_error = false;
    for (job, result) in jobs.iter().zip(results) {
        match result {
            Ok(file_findings) => {
                files_scanned += 1;
                if mode == OutputMode::Verbose {
                    println!("Scanning: {}", job.path.display());
                    text.write_all(&file_findings)?;
                }
                findings.extend(file_findings);
            }
            Err(err) => {
                eprintln!("{}", err);
                had_error = true;
            }
        }
    }

    match mode {
        OutputMode::Plain => text.write_all(&findings)?,
        OutputMode::Count => println!("{}", findings.len()),
        OutputMode::Json => json::write_findings(&mut std::io::stdout().lock(), &findings)?,
        OutputMode::Verbose => {
            println!(
                "Scanned {} file(s), found {} finding(s)",
                files_scanned,
                findings.len()
            );
        }
        OutputMode::Quiet => {}
    }

    Ok(exit_code(cli.warn_only, !findings.is_empty(), had_error))
}

/// Sequential scan that stops at the first file with findings, reporting
/// only that file's first finding.
fn run_fail_fast(
    jobs: &[FileJob],
    allow: &AllowList,
    mode: OutputMode,
    text: &mut TextFormatter,
) -> anyhow::Result<ExitCode> {
    let mut files_scanned = 0usize;
    let mut had_error = false;
    for job in jobs {
        let findings = match scan_job(job, allow) {
            Ok(findings) => findings,
            Err(err) => {
                eprintln!("{}", err);
                had_error = true;
                continue;
            }
        };
        files_scanned += 1;
        if mode == OutputMode::Verbose {
            println!("Scanning: {}", job.path.display());
        }
        if let Some(first) = findings.first() {
            match mode {
                OutputMode::Plain | OutputMode::Verbose => text.write_finding(first)?,
                OutputMode::Count => println!("1"),
                OutputMode::Json => {
                    json::write_findings(&mut std::io::stdout().lock(), std::slice::from_ref(first))?;
                }
                OutputMode::Quiet => {}
            }
            if mode == OutputMode::Verbose {
                println!("Scanned {} file(s), found 1 finding(s)", files_scanned);
            }
            return Ok(ExitCode::Findings);
        }
    }

    match mode {
        OutputMode::Count => println!("0"),
        OutputMode::Json => json::write_findings(&mut std::io::stdout().lock(), &[])?,
        OutputMode::Verbose => {
            println!("Scanned {} file(s), found 0 finding(s)", files_scanned);
        }
        OutputMode::Plain | OutputMode::Quiet => {}
    }
    Ok(if had_error {
        ExitCode::Error
    } else {
        ExitCode::Success
    })
}

/// Pair each candidate file with the requested tools applicable to its
/// extension. Files with no applicable tool are silently skipped.
fn build_jobs(files: Vec<PathBuf>, tools: &ToolSet) -> Vec<FileJob> {
    files
        .into_iter()
        .filter_map(|path| {
            let ext = path.extension()?.to_str()?.to_ascii_lowercase();
            let applicable = tools.applicable_to(&ext);
            if applicable.is_empty() {
                return None;
            }
            let mode = syntax_mode_for_extension(&ext);
            Some(FileJob {
                path,
                tools: applicable,
                mode,
            })
        })
        .collect()
}

fn scan_job(job: &FileJob, allow: &AllowList) -> nohush::Result<Vec<Finding>> {
    let content = std::fs::read_to_string(&job.path).map_err(|source| Error::Io {
        path: job.path.clone(),
        source,
    })?;
    Ok(scan_file(
        &job.path.display().to_string(),
        &content,
        &job.tools,
        allow,
        job.mode,
    ))
}

/// Findings take precedence over read errors; read errors over a clean run.
/// `--warn-only` forces success after reporting.
fn exit_code(warn_only: bool, has_findings: bool, had_error: bool) -> ExitCode {
    if warn_only {
        ExitCode::Success
    } else if has_findings {
        ExitCode::Findings
    } else if had_error {
        ExitCode::Error
    } else {
        ExitCode::Success
    }
}
