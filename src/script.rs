// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generation of the kubectl cleanup script.

use crate::constants::{SCRIPT_HEADER, TARGET_NAMESPACE};
use crate::error::Result;
use crate::manifest::ManifestId;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Render the cleanup script body, one `kubectl delete` line per orphan.
pub fn render_deletion_script(orphans: &[ManifestId]) -> String {
    let mut script = String::from(SCRIPT_HEADER);
    for manifest in orphans {
        script.push_str(&format!(
            "kubectl delete -n {} {} {}\n",
            TARGET_NAMESPACE,
            manifest.simple_kind(),
            manifest.name.to_lowercase()
        ));
    }
    script
}

/// Write the cleanup script to `path`. The file is closed on every exit
/// path; on failure partial content may remain on disk.
pub fn write_deletion_script(path: &Path, orphans: &[ManifestId]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(render_deletion_script(orphans).as_bytes())?;
    writer.flush()?;

    info!("Deletion script created: '{}'", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_id(api_version: &str, kind: &str, name: &str) -> ManifestId {
        ManifestId {
            api_version: api_version.to_string(),
            kind: kind.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_render_two_orphans() {
        let orphans = vec![
            make_id("apps/v1", "Deployment", "rafter-asyncapi-svc"),
            make_id(
                "monitoring.coreos.com/v1",
                "ServiceMonitor",
                "rafter-controller-manager",
            ),
        ];

        assert_eq!(
            render_deletion_script(&orphans),
            "#!/usr/bin/env bash\n\
             \n\
             kubectl delete -n kyma-system deployments.apps rafter-asyncapi-svc\n\
             kubectl delete -n kyma-system servicemonitors.monitoring.coreos.com rafter-controller-manager\n"
        );
    }

    #[test]
    fn test_render_core_group_has_no_dot() {
        let orphans = vec![make_id("v1", "ConfigMap", "foo")];

        assert_eq!(
            render_deletion_script(&orphans),
            "#!/usr/bin/env bash\n\nkubectl delete -n kyma-system configmap foo\n"
        );
    }

    #[test]
    fn test_render_lowercases_name() {
        let orphans = vec![make_id("policy/v1beta1", "PodSecurityPolicy", "002-Kyma-Privileged")];

        assert_eq!(
            render_deletion_script(&orphans),
            "#!/usr/bin/env bash\n\nkubectl delete -n kyma-system podsecuritypolicies.policy 002-kyma-privileged\n"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let orphans = vec![
            make_id("apps/v1", "Deployment", "foo"),
            make_id("v1", "Service", "bar"),
        ];

        assert_eq!(render_deletion_script(&orphans), render_deletion_script(&orphans));
    }

    #[test]
    fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cleanup.sh");
        let orphans = vec![make_id("v1", "ConfigMap", "foo")];

        write_deletion_script(&path, &orphans).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_deletion_script(&orphans));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("cleanup.sh");

        let err = write_deletion_script(&path, &[]).unwrap_err();

        assert!(err.to_string().starts_with("error writing to file:"));
    }
}
