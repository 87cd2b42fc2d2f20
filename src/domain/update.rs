//! Update record structures

use super::version::{classify, DiffSeverity, Version};
use std::fmt;

/// One discoverable upgrade for a single module
///
/// Created once per discovery pass and read-only afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRecord {
    /// Module path as reported by the listing command
    pub name: String,
    /// Version currently required
    pub from: Version,
    /// Version available to upgrade to
    pub to: Version,
}

impl UpdateRecord {
    /// Creates a new update record
    pub fn new(name: impl Into<String>, from: Version, to: Version) -> Self {
        Self {
            name: name.into(),
            from,
            to,
        }
    }

    /// Severity of the version delta, for display emphasis
    pub fn severity(&self) -> DiffSeverity {
        classify(&self.from, &self.to)
    }

    /// True when both sides parse to the same version.
    ///
    /// The listing command only reports distinct strings, but `1.0.0` and
    /// `v1.0.0` parse equal. Such records are kept and shown as no-ops;
    /// nothing filters on this, it only pins that behavior in tests.
    pub(crate) fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for UpdateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.name, self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, from: &str, to: &str) -> UpdateRecord {
        UpdateRecord::new(
            name,
            Version::parse(from).unwrap(),
            Version::parse(to).unwrap(),
        )
    }

    #[test]
    fn test_severity_delegates_to_classify() {
        assert_eq!(
            record("foo", "1.2.3", "1.3.0").severity(),
            DiffSeverity::Minor
        );
    }

    #[test]
    fn test_is_noop_for_equivalent_strings() {
        assert!(record("foo", "1.0.0", "v1.0.0").is_noop());
        assert!(!record("foo", "1.0.0", "1.0.1").is_noop());
    }

    #[test]
    fn test_display() {
        let text = format!("{}", record("github.com/pkg/errors", "0.8.0", "0.9.1"));
        assert_eq!(text, "github.com/pkg/errors: 0.8.0 -> 0.9.1");
    }
}
