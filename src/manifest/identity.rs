// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::collections::HashMap;

/// Identifies a resource within a manifest set.
///
/// Two manifests describe the same resource when kind and name match;
/// apiVersion is carried along for script generation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestId {
    pub api_version: String,
    pub kind: String,
    pub name: String,
}

/// Lookup key for a manifest set. Structured so that kind and name can
/// never bleed into each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KindName {
    pub kind: String,
    pub name: String,
}

/// Manifests indexed by (kind, name). A stream containing the same
/// resource twice keeps the later occurrence.
pub type ManifestSet = HashMap<KindName, ManifestId>;

impl ManifestId {
    pub fn key(&self) -> KindName {
        KindName {
            kind: self.kind.clone(),
            name: self.name.clone(),
        }
    }

    /// The resource token kubectl expects: lowercased kind, and for
    /// non-core groups a trailing `s` plus the lowercased group, e.g.
    /// `deployments.apps` for a `Deployment` in `apps/v1`.
    pub fn simple_kind(&self) -> String {
        let kind = self.kind.to_lowercase();
        match self.api_version.split_once('/') {
            Some((group, _version)) => format!("{}s.{}", kind, group.to_lowercase()),
            None => kind,
        }
    }
}
