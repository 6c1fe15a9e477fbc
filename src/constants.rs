// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace every emitted `kubectl delete` command targets
pub const TARGET_NAMESPACE: &str = "kyma-system";

/// First lines of the generated cleanup script
pub const SCRIPT_HEADER: &str = "#!/usr/bin/env bash\n\n";
