// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweeperError {
    #[error("flag not specified: {0}")]
    MissingFlag(&'static str),

    #[error("invalid ignored manifest format: {0}")]
    InvalidIgnoreEntry(String),

    #[error("unable to read manifest file at '{}': {source}", path.display())]
    ReadManifest {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to parse manifests: {0}")]
    ParseManifests(String),

    #[error("error writing to file: {0}")]
    WriteScript(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SweeperError>;
