//! Go toolchain integration
//!
//! This module provides:
//! - A narrow trait over the `go` commands the assistant shells out to
//! - The system implementation backed by `std::process::Command`
//!
//! Keeping the subprocess boundary behind `ModuleToolchain` lets the
//! discovery parser and apply driver run against fake text producers in
//! tests.

use crate::error::DiscoveryError;
use std::process::Command;

// Template passed to `go list` so each candidate module prints as
// '<path>: <current> -> <available>' and everything else prints as ''.
const LIST_FORMAT: &str =
    "'{{if (and (not (or .Main .Indirect)) .Update)}}{{.Path}}: {{.Version}} -> {{.Update.Version}}{{end}}'";

/// Result of one module upgrade invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeResult {
    /// The module the command ran for
    pub module: String,
    /// Whether the command succeeded
    pub success: bool,
    /// Combined stdout and stderr, kept for diagnostics
    pub output: String,
}

impl UpgradeResult {
    /// Creates a successful upgrade result
    pub fn success(module: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            success: true,
            output: output.into(),
        }
    }

    /// Creates a failed upgrade result
    pub fn failure(module: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            success: false,
            output: output.into(),
        }
    }
}

/// Narrow interface over the external dependency-manager commands
pub trait ModuleToolchain {
    /// Lists candidate updates, one line per module. Blocking, no timeout.
    fn list_updates(&self) -> Result<String, DiscoveryError>;

    /// Upgrades a single module. Blocking, no timeout; failure is reported
    /// through the result, never as an error.
    fn upgrade(&self, module: &str) -> UpgradeResult;
}

/// Toolchain implementation that executes the real `go` binary
pub struct SystemToolchain;

impl SystemToolchain {
    /// Creates a new system toolchain
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemToolchain {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleToolchain for SystemToolchain {
    fn list_updates(&self) -> Result<String, DiscoveryError> {
        let output = Command::new("go")
            .args(["list", "-u", "-mod=mod", "-f", LIST_FORMAT, "-m", "all"])
            .output()
            .map_err(|e| DiscoveryError::command_launch("go list", e))?;

        if !output.status.success() {
            return Err(DiscoveryError::command_failed(
                "go list",
                output.status,
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn upgrade(&self, module: &str) -> UpgradeResult {
        match Command::new("go").args(["get", module]).output() {
            Ok(out) => {
                let mut combined = String::from_utf8_lossy(&out.stdout).into_owned();
                combined.push_str(&String::from_utf8_lossy(&out.stderr));
                if out.status.success() {
                    UpgradeResult::success(module, combined)
                } else {
                    UpgradeResult::failure(module, combined)
                }
            }
            Err(err) => UpgradeResult::failure(module, err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_result_success() {
        let result = UpgradeResult::success("github.com/pkg/errors", "done");
        assert!(result.success);
        assert_eq!(result.module, "github.com/pkg/errors");
        assert_eq!(result.output, "done");
    }

    #[test]
    fn test_upgrade_result_failure() {
        let result = UpgradeResult::failure("github.com/pkg/errors", "network down");
        assert!(!result.success);
        assert_eq!(result.output, "network down");
    }

    #[test]
    fn test_list_format_covers_direct_updates_only() {
        assert!(LIST_FORMAT.contains(".Update"));
        assert!(LIST_FORMAT.contains(".Indirect"));
        assert!(LIST_FORMAT.contains("{{.Path}}: {{.Version}} -> {{.Update.Version}}"));
    }
}
