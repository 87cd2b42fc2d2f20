//! Listing entry formatters
//!
//! The name column carries the severity color of the whole delta; the "to"
//! column highlights individual fields from the first point of divergence.

use crate::domain::{UpdateRecord, Version};
use crate::output::Style;

/// One piece of the rendered "to" version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Literal text of this piece
    pub text: String,
    /// Whether this piece is drawn with the change highlight
    pub changed: bool,
}

impl Segment {
    fn new(text: impl Into<String>, changed: bool) -> Self {
        Self {
            text: text.into(),
            changed,
        }
    }
}

/// Right-pads `text` with spaces to `width`; never truncates
pub fn pad_right(text: &str, width: usize) -> String {
    if text.len() >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - text.len()))
    }
}

/// Formats the module name, padded and colored by diff severity
pub fn format_name(record: &UpdateRecord, width: usize) -> String {
    Style::from(record.severity()).paint(&pad_right(&record.name, width))
}

/// Formats the currently-required version, padded, in the current-version color
pub fn format_from(from: &Version, width: usize) -> String {
    Style::Current.paint(&pad_right(&from.to_string(), width))
}

/// Splits the "to" version into display segments.
///
/// A `same` flag goes false on the first differing field and never resets:
/// fields past the point of divergence are highlighted even when their
/// values happen to be equal. The major field and the prerelease dash are
/// always plain; build metadata, when present, is always highlighted.
pub fn to_segments(record: &UpdateRecord) -> Vec<Segment> {
    let from = &record.from;
    let to = &record.to;
    let mut segments = Vec::new();
    let mut same = true;

    segments.push(Segment::new(format!("{}.", to.major()), false));

    if from.minor() == to.minor() {
        segments.push(Segment::new(format!("{}.", to.minor()), false));
    } else {
        segments.push(Segment::new(format!("{}.", to.minor()), true));
        same = false;
    }

    if from.patch() == to.patch() && same {
        segments.push(Segment::new(to.patch().to_string(), false));
    } else {
        segments.push(Segment::new(to.patch().to_string(), true));
        same = false;
    }

    if !to.prerelease().is_empty() {
        segments.push(Segment::new("-", false));
        let changed = from.prerelease() != to.prerelease() || !same;
        segments.push(Segment::new(to.prerelease(), changed));
    }

    if !to.build().is_empty() {
        segments.push(Segment::new("+", true));
        segments.push(Segment::new(to.build(), true));
    }

    segments
}

/// Formats the target version with per-field change highlighting
pub fn format_to(record: &UpdateRecord) -> String {
    let mut out = String::new();
    for segment in to_segments(record) {
        if segment.changed {
            out.push_str(&Style::Changed.paint(&segment.text));
        } else {
            out.push_str(&segment.text);
        }
    }
    out
}
