//! Apply driver
//!
//! Runs the upgrade command for each selected record. A failing upgrade is
//! reported and the loop moves on; it never aborts the remaining records.

use crate::domain::UpdateRecord;
use crate::output::{format_name, format_to};
use crate::toolchain::ModuleToolchain;

/// Outcome summary of one apply pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// How many upgrades were attempted
    pub attempted: usize,
    /// Names of the modules whose upgrade command failed
    pub failed: Vec<String>,
}

/// Upgrades each record in order, isolating failures per item
pub fn apply(toolchain: &dyn ModuleToolchain, records: &[UpdateRecord]) -> ApplyReport {
    let mut report = ApplyReport::default();
    for record in records {
        println!(
            "Updating {} to version {}...",
            format_name(record, record.name.len()),
            format_to(record)
        );
        let result = toolchain.upgrade(&record.name);
        report.attempted += 1;
        if !result.success {
            // Failure diagnostics go to stdout, interleaved with the
            // per-module progress lines.
            println!("Error while updating {}: {}", record.name, result.output);
            report.failed.push(record.name.clone());
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Version;
    use crate::error::DiscoveryError;
    use crate::toolchain::UpgradeResult;
    use std::cell::RefCell;

    /// Fake toolchain that fails upgrades for configured module names and
    /// records every call in order.
    struct FlakyToolchain {
        failing: Vec<String>,
        calls: RefCell<Vec<String>>,
    }

    impl FlakyToolchain {
        fn new(failing: &[&str]) -> Self {
            Self {
                failing: failing.iter().map(|s| s.to_string()).collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ModuleToolchain for FlakyToolchain {
        fn list_updates(&self) -> Result<String, DiscoveryError> {
            Ok(String::new())
        }

        fn upgrade(&self, module: &str) -> UpgradeResult {
            self.calls.borrow_mut().push(module.to_string());
            if self.failing.iter().any(|f| f == module) {
                UpgradeResult::failure(module, "simulated failure")
            } else {
                UpgradeResult::success(module, "")
            }
        }
    }

    fn record(name: &str) -> UpdateRecord {
        UpdateRecord::new(
            name,
            Version::parse("1.0.0").unwrap(),
            Version::parse("1.1.0").unwrap(),
        )
    }

    #[test]
    fn test_apply_runs_every_record_in_order() {
        let toolchain = FlakyToolchain::new(&[]);
        let records = [record("a"), record("b"), record("c")];
        let report = apply(&toolchain, &records);
        assert_eq!(report.attempted, 3);
        assert!(report.failed.is_empty());
        assert_eq!(*toolchain.calls.borrow(), ["a", "b", "c"]);
    }

    #[test]
    fn test_failure_does_not_abort_remaining_upgrades() {
        let toolchain = FlakyToolchain::new(&["b"]);
        let records = [record("a"), record("b"), record("c")];
        let report = apply(&toolchain, &records);
        assert_eq!(report.attempted, 3);
        assert_eq!(report.failed, ["b"]);
        assert_eq!(*toolchain.calls.borrow(), ["a", "b", "c"]);
    }

    #[test]
    fn test_apply_with_no_records() {
        let toolchain = FlakyToolchain::new(&[]);
        let report = apply(&toolchain, &[]);
        assert_eq!(report, ApplyReport::default());
        assert!(toolchain.calls.borrow().is_empty());
    }
}
