// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;

use sweeper::config::Config;
use sweeper::diff::{find_orphans, parse_ignore_list};
use sweeper::error::SweeperError;
use sweeper::manifest::load_manifests;
use sweeper::report::{print_no_delta, print_summary};
use sweeper::script::write_deletion_script;

fn main() {
    // Diagnostics go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let config = Config::parse();
    if let Err(err) = run(&config) {
        eprintln!("Error: {err}");
        std::process::exit(2);
    }
}

fn run(config: &Config) -> Result<()> {
    let from_path = config
        .from
        .as_deref()
        .ok_or(SweeperError::MissingFlag("from"))?;
    let to_path = config.to.as_deref().ok_or(SweeperError::MissingFlag("to"))?;
    let ignored = match config.ignore.as_deref() {
        Some(list) if !list.is_empty() => parse_ignore_list(list)?,
        _ => Vec::new(),
    };

    let from = load_manifests(from_path)?;
    let to = load_manifests(to_path)?;

    let orphans = find_orphans(&from, &to, &ignored);
    if orphans.is_empty() {
        print_no_delta();
        return Ok(());
    }

    print_summary(&orphans);
    if let Some(output) = config.output.as_deref() {
        write_deletion_script(output, &orphans)?;
    }
    Ok(())
}
