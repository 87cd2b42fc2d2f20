//! Application error types using thiserror
//!
//! Error hierarchy:
//! - DiscoveryError: failures while listing available module updates
//! - ParseError: a listing line that does not match the expected pattern
//! - VersionError: a version string the version model rejects
//!
//! Upgrade failures are deliberately not represented here: they are
//! recoverable and reported inline by the apply driver.

use std::process::ExitStatus;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Discovery related errors
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Selection prompt failures other than operator interrupt
    #[error("selection prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Errors raised while discovering available updates
///
/// Discovery is all-or-nothing: any of these aborts the whole pass and no
/// partial record list is surfaced.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The listing command could not be launched
    #[error("failed to run `{command}`: {source}")]
    CommandLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The listing command ran but exited unsuccessfully
    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    /// A listing line did not match the expected pattern
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A listed version string was rejected by the version model
    #[error(transparent)]
    Version(#[from] VersionError),
}

/// A listing line that does not match the `'name: from -> to'` pattern
#[derive(Error, Debug)]
#[error("couldn't parse module line {line:?}")]
pub struct ParseError {
    /// The raw offending line, verbatim
    pub line: String,
}

/// A version string rejected by the semantic-version grammar
#[derive(Error, Debug)]
#[error("invalid version '{text}': {source}")]
pub struct VersionError {
    /// The raw version text as reported by the listing command
    pub text: String,
    #[source]
    source: semver::Error,
}

impl DiscoveryError {
    /// Creates a new CommandLaunch error
    pub fn command_launch(command: impl Into<String>, source: std::io::Error) -> Self {
        DiscoveryError::CommandLaunch {
            command: command.into(),
            source,
        }
    }

    /// Creates a new CommandFailed error
    pub fn command_failed(
        command: impl Into<String>,
        status: ExitStatus,
        stderr: impl Into<String>,
    ) -> Self {
        DiscoveryError::CommandFailed {
            command: command.into(),
            status,
            stderr: stderr.into(),
        }
    }
}

impl ParseError {
    /// Creates a new ParseError for the given raw line
    pub fn new(line: impl Into<String>) -> Self {
        ParseError { line: line.into() }
    }
}

impl VersionError {
    /// Creates a new VersionError
    pub fn new(text: impl Into<String>, source: semver::Error) -> Self {
        VersionError {
            text: text.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn semver_error() -> semver::Error {
        semver::Version::parse("not-a-version").unwrap_err()
    }

    #[test]
    fn test_parse_error_names_line() {
        let err = ParseError::new("garbage line");
        let msg = format!("{}", err);
        assert!(msg.contains("couldn't parse module line"));
        assert!(msg.contains("garbage line"));
    }

    #[test]
    fn test_version_error_names_text() {
        let err = VersionError::new("1.x.3", semver_error());
        let msg = format!("{}", err);
        assert!(msg.contains("invalid version '1.x.3'"));
    }

    #[test]
    fn test_command_launch_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = DiscoveryError::command_launch("go list", io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to run `go list`"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_discovery_error_from_parse_error() {
        let err: DiscoveryError = ParseError::new("bad").into();
        let msg = format!("{}", err);
        assert!(msg.contains("couldn't parse module line"));
    }

    #[test]
    fn test_app_error_from_discovery_error() {
        let discovery: DiscoveryError = VersionError::new("oops", semver_error()).into();
        let app: AppError = discovery.into();
        let msg = format!("{}", app);
        assert!(msg.contains("invalid version 'oops'"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ParseError::new("x");
        let debug = format!("{:?}", err);
        assert!(debug.contains("ParseError"));
    }
}
