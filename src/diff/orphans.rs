// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Set difference between the installed and the upgraded manifest set.

use crate::diff::ignore::{is_ignored, IgnoredResource};
use crate::manifest::{ManifestId, ManifestSet};

/// Resources present in `from` but absent from `to`, minus ignored
/// entries, sorted by (kind, name).
///
/// Presence is judged on (kind, name) alone: a resource that merely moved
/// to a new apiVersion is continued, not orphaned. Sorting happens after
/// filtering so the result depends only on the surviving orphans.
pub fn find_orphans(
    from: &ManifestSet,
    to: &ManifestSet,
    ignored: &[IgnoredResource],
) -> Vec<ManifestId> {
    let mut orphans: Vec<ManifestId> = from
        .iter()
        .filter(|(key, _)| !to.contains_key(key))
        .map(|(_, manifest)| manifest.clone())
        .filter(|manifest| !is_ignored(manifest, ignored))
        .collect();

    orphans.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
    orphans
}
