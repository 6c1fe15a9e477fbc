// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Parsing and matching of operator-supplied ignore entries.

use crate::error::{Result, SweeperError};
use crate::manifest::ManifestId;

/// A resource the operator wants kept out of the cleanup script. The kind
/// is given in the same form the script emits (lowercased, group-qualified
/// for non-core groups); no apiVersion is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredResource {
    pub kind: String,
    pub name: String,
}

/// Parse a comma-separated list of `kind:name` entries.
pub fn parse_ignore_list(list: &str) -> Result<Vec<IgnoredResource>> {
    list.split(',').map(parse_entry).collect()
}

fn parse_entry(entry: &str) -> Result<IgnoredResource> {
    match entry.split_once(':') {
        Some((kind, name)) if !kind.is_empty() && !name.is_empty() && !name.contains(':') => {
            Ok(IgnoredResource {
                kind: kind.to_string(),
                name: name.to_string(),
            })
        }
        _ => Err(SweeperError::InvalidIgnoreEntry(entry.to_string())),
    }
}

/// Whether a manifest matches any ignore entry.
pub fn is_ignored(manifest: &ManifestId, ignored: &[IgnoredResource]) -> bool {
    ignored
        .iter()
        .any(|entry| entry.kind == manifest.simple_kind() && entry.name == manifest.name)
}
