//! Rendering of update listings
//!
//! This module provides:
//! - The stateless style palette mapping diff severity to terminal colors
//! - Column-padded, change-highlighted formatting for listing entries

pub mod render;

pub use render::{format_from, format_name, format_to, pad_right, to_segments, Segment};

use crate::domain::DiffSeverity;
use colored::Colorize;

/// Visual styles used by the listing renderer
///
/// Stateless by design: callers pass the style explicitly instead of
/// mutating a shared formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// No emphasis
    Plain,
    /// Patch-level difference (green)
    Patch,
    /// Minor-level difference (yellow)
    Minor,
    /// Major-level difference (bright red)
    Major,
    /// Prerelease difference (red)
    Prerelease,
    /// A version field that changed (green)
    Changed,
    /// The currently-required version column (blue)
    Current,
}

impl Style {
    /// Applies this style to the given text
    pub fn paint(self, text: &str) -> String {
        match self {
            Style::Plain => text.normal().to_string(),
            Style::Patch => text.green().to_string(),
            Style::Minor => text.yellow().to_string(),
            Style::Major => text.bright_red().to_string(),
            Style::Prerelease => text.red().to_string(),
            Style::Changed => text.green().to_string(),
            Style::Current => text.blue().to_string(),
        }
    }
}

impl From<DiffSeverity> for Style {
    fn from(severity: DiffSeverity) -> Self {
        match severity {
            DiffSeverity::None => Style::Plain,
            DiffSeverity::Patch => Style::Patch,
            DiffSeverity::Minor => Style::Minor,
            DiffSeverity::Major => Style::Major,
            DiffSeverity::Prerelease => Style::Prerelease,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_without_colors_is_identity() {
        colored::control::set_override(false);
        for style in [
            Style::Plain,
            Style::Patch,
            Style::Minor,
            Style::Major,
            Style::Prerelease,
            Style::Changed,
            Style::Current,
        ] {
            assert_eq!(style.paint("text"), "text");
        }
    }

    #[test]
    fn test_style_from_severity() {
        assert_eq!(Style::from(DiffSeverity::None), Style::Plain);
        assert_eq!(Style::from(DiffSeverity::Minor), Style::Minor);
        assert_eq!(Style::from(DiffSeverity::Patch), Style::Patch);
        assert_eq!(Style::from(DiffSeverity::Major), Style::Major);
        assert_eq!(Style::from(DiffSeverity::Prerelease), Style::Prerelease);
    }
}
