// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use std::path::PathBuf;

/// Compare two rendered manifest sets and generate a cleanup script for
/// resources the upgrade leaves behind.
#[derive(Debug, Parser)]
#[command(name = "sweeper", version, about)]
pub struct Config {
    /// Path to the manifests file of the installed version
    #[arg(long, value_name = "PATH")]
    pub from: Option<PathBuf>,

    /// Path to the manifests file of the upgrade
    #[arg(long, value_name = "PATH")]
    pub to: Option<PathBuf>,

    /// Name of the cleanup script file to be generated
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// List of resources to ignore
    #[arg(
        long,
        value_name = "LIST",
        long_help = "List of resources to ignore.\n\
                     Usage: --ignore kind1:name1,kind2:name2\n\
                     Example: --ignore service:foo,servicemonitors.monitoring.coreos.com:bar"
    )]
    pub ignore: Option<String>,
}
