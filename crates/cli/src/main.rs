// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Nohush Contributors

//! Nohush CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use nohush::cli::Cli;
use nohush::error::ExitCode;

mod cmd_scan;

fn init_logging() {
    let filter = EnvFilter::try_from_env("NOHUSH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("nohush: {}", e);
            match e.downcast_ref::<nohush::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::Error,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cmd_scan::run(&cli)
}
