// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Human-readable summary printed to stdout.

use crate::manifest::ManifestId;

/// Print the list of resources the cleanup script will delete.
pub fn print_summary(orphans: &[ManifestId]) {
    if orphans.is_empty() {
        return;
    }
    println!("Resources to be deleted after upgrade:");
    for manifest in orphans {
        println!("{manifest:?}");
    }
}

/// Print the no-op line for an empty delta.
pub fn print_no_delta() {
    println!("Manifests delta is ok");
}
