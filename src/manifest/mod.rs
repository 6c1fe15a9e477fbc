// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Manifest loading and identity extraction.

pub mod identity;
pub mod loader;

pub use identity::{KindName, ManifestId, ManifestSet};
pub use loader::load_manifests;
