// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Orphan detection: set difference and ignore filtering.

pub mod ignore;
pub mod orphans;

pub use ignore::{parse_ignore_list, IgnoredResource};
pub use orphans::find_orphans;
