// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Loading and indexing of multi-document manifest streams.

use crate::error::{Result, SweeperError};
use crate::manifest::identity::{ManifestId, ManifestSet};
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tracing::warn;

/// The identifying header every Kubernetes resource carries. All other
/// fields of the document are ignored.
#[derive(Debug, Deserialize)]
struct ManifestHeader {
    #[serde(rename = "apiVersion")]
    api_version: String,
    kind: String,
    metadata: ManifestMetadata,
}

#[derive(Debug, Deserialize)]
struct ManifestMetadata {
    name: String,
}

/// Read a manifest file and index every document by (kind, name).
pub fn load_manifests(path: &Path) -> Result<ManifestSet> {
    let content = fs::read_to_string(path).map_err(|source| SweeperError::ReadManifest {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifests(&content)
}

/// Parse a multi-document YAML stream into a manifest set.
///
/// Null documents are skipped silently and documents whose root is not a
/// mapping are skipped with a warning. A document that fails to decode,
/// or whose header fields are missing or not strings, fails the whole
/// stream.
pub fn parse_manifests(content: &str) -> Result<ManifestSet> {
    let mut manifests = ManifestSet::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        let value = Value::deserialize(document)
            .map_err(|err| SweeperError::ParseManifests(err.to_string()))?;
        if value.is_null() {
            continue;
        }
        if !value.is_mapping() {
            warn!(
                "type error: expected a mapping at the document root, found {}",
                value_kind(&value)
            );
            continue;
        }
        let header: ManifestHeader = serde_yaml::from_value(value)
            .map_err(|err| SweeperError::ParseManifests(err.to_string()))?;
        let manifest = ManifestId {
            api_version: header.api_version,
            kind: header.kind,
            name: header.metadata.name,
        };
        manifests.insert(manifest.key(), manifest);
    }
    Ok(manifests)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
