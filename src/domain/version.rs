//! Semantic version model and diff classification
//!
//! Wraps `semver::Version` with the lenient parsing the Go toolchain output
//! needs (leading `v` prefix, partial numeric cores) and an ordering that
//! excludes build metadata, plus the severity classification used for
//! display emphasis.

use crate::error::VersionError;
use std::cmp::Ordering;
use std::fmt;

/// How visibly two versions differ
///
/// Used purely for display emphasis, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffSeverity {
    /// No classified field differs
    None,
    /// Patch level differs
    Patch,
    /// Minor level differs
    Minor,
    /// Major level differs; part of the palette but never produced by
    /// [`classify`], which does not look at the major component
    Major,
    /// Prerelease identifiers differ
    Prerelease,
}

/// An immutable, parsed semantic version
#[derive(Debug, Clone)]
pub struct Version {
    inner: semver::Version,
}

impl Version {
    /// Parses a version string.
    ///
    /// Accepts standard `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` syntax plus
    /// the lenient forms module listings contain: a leading `v`/`V` prefix
    /// is stripped, and a partial numeric core (`1`, `1.2`) is widened with
    /// zeros before strict parsing.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let trimmed = text.trim();
        let bare = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        match semver::Version::parse(bare) {
            Ok(inner) => Ok(Self { inner }),
            Err(err) => match widen(bare) {
                Some(widened) => semver::Version::parse(&widened)
                    .map(|inner| Self { inner })
                    .map_err(|_| VersionError::new(text, err)),
                None => Err(VersionError::new(text, err)),
            },
        }
    }

    /// Major component
    pub fn major(&self) -> u64 {
        self.inner.major
    }

    /// Minor component
    pub fn minor(&self) -> u64 {
        self.inner.minor
    }

    /// Patch component
    pub fn patch(&self) -> u64 {
        self.inner.patch
    }

    /// Prerelease identifiers as written, empty when absent
    pub fn prerelease(&self) -> &str {
        self.inner.pre.as_str()
    }

    /// Build metadata as written, empty when absent; retained for display
    /// only and excluded from ordering
    pub fn build(&self) -> &str {
        self.inner.build.as_str()
    }
}

/// Widens a partial numeric core with zeros: `1` -> `1.0.0`, `1.2` -> `1.2.0`.
/// Prerelease and build suffixes are preserved.
fn widen(text: &str) -> Option<String> {
    let split = text.find(['-', '+']).unwrap_or(text.len());
    let (core, rest) = text.split_at(split);
    if core.is_empty() || !core.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    match core.bytes().filter(|b| *b == b'.').count() {
        0 => Some(format!("{core}.0.0{rest}")),
        1 => Some(format!("{core}.0{rest}")),
        _ => None,
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

// Ordering and equality follow semver precedence, which ignores build
// metadata. The derived impls would compare it, so all four are manual.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp_precedence(&other.inner)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Classifies the delta between two versions for name styling.
///
/// The three checks run unconditionally in sequence and each overwrites the
/// previous result, so the last matching check wins rather than the most
/// severe one. This replicates the tool's observed output and is covered by
/// tests; it is not an ordering bug to fix.
pub fn classify(from: &Version, to: &Version) -> DiffSeverity {
    let mut severity = DiffSeverity::None;
    if from.minor() != to.minor() {
        severity = DiffSeverity::Minor;
    }
    if from.patch() != to.patch() {
        severity = DiffSeverity::Patch;
    }
    if from.prerelease() != to.prerelease() {
        severity = DiffSeverity::Prerelease;
    }
    severity
}
