//! Interactive selection of updates to apply
//!
//! Measures columns, decides whether the terminal is wide enough to show
//! the currently-required version, and delegates to the multi-select
//! widget.

use crate::domain::UpdateRecord;
use crate::error::AppError;
use crate::output::{format_from, format_name, format_to};
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::MultiSelect;
use std::io;

/// Fixed width consumed by separators and the arrow glyph in an option line.
///
/// The widget renders incorrectly when an option string wraps, so the
/// from-version column is dropped unless the full line is guaranteed to fit.
pub const COLUMN_OVERHEAD: usize = 11;

/// Maximum plain-text width of each listing column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnWidths {
    /// Widest module name
    pub name: usize,
    /// Widest current version
    pub from: usize,
    /// Widest available version
    pub to: usize,
}

/// Outcome of one interactive selection round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Records the operator picked, in the widget's native index order
    Chosen(Vec<UpdateRecord>),
    /// The operator cancelled; the caller exits cleanly without upgrading
    Interrupted,
}

/// Measures the widest plain rendering of each column
pub fn measure(records: &[UpdateRecord]) -> ColumnWidths {
    let mut widths = ColumnWidths::default();
    for record in records {
        widths.name = widths.name.max(record.name.len());
        widths.from = widths.from.max(record.from.to_string().len());
        widths.to = widths.to.max(record.to.to_string().len());
    }
    widths
}

/// Whether the from-version column fits the terminal.
///
/// Unknown width (stdout is not a terminal) degrades to hiding the column
/// rather than failing.
pub fn fits_from_column(widths: ColumnWidths, terminal_width: Option<usize>) -> bool {
    match terminal_width {
        Some(width) => width > widths.name + widths.from + widths.to + COLUMN_OVERHEAD,
        None => false,
    }
}

/// Builds one option string per record
pub fn build_options(
    records: &[UpdateRecord],
    widths: ColumnWidths,
    show_from: bool,
) -> Vec<String> {
    records
        .iter()
        .map(|record| {
            let from = if show_from {
                format_from(&record.from, widths.from)
            } else {
                String::new()
            };
            format!(
                "{} {} -> {}",
                format_name(record, widths.name),
                from,
                format_to(record)
            )
        })
        .collect()
}

/// Maps widget indices back onto the discovered records
pub fn pick(records: &[UpdateRecord], indices: &[usize]) -> Vec<UpdateRecord> {
    indices.iter().map(|&i| records[i].clone()).collect()
}

/// Maps the widget's raw outcome onto a selection.
///
/// `None` (Esc or `q`) and an interrupted IO error (Ctrl-C) are both
/// operator cancel and yield [`Selection::Interrupted`]; any other widget
/// error propagates.
pub fn resolve_outcome(
    records: &[UpdateRecord],
    outcome: Result<Option<Vec<usize>>, dialoguer::Error>,
) -> Result<Selection, AppError> {
    match outcome {
        Ok(Some(indices)) => Ok(Selection::Chosen(pick(records, &indices))),
        Ok(None) => Ok(Selection::Interrupted),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
            Ok(Selection::Interrupted)
        }
        Err(err) => Err(AppError::Prompt(err)),
    }
}

/// Runs the interactive multi-select prompt.
///
/// Operator cancel yields [`Selection::Interrupted`], which is a normal
/// outcome distinct from selecting nothing.
pub fn choose(records: &[UpdateRecord], page_size: usize) -> Result<Selection, AppError> {
    let widths = measure(records);
    let terminal_width = Term::stdout()
        .size_checked()
        .map(|(_rows, cols)| cols as usize);
    let show_from = fits_from_column(widths, terminal_width);
    let options = build_options(records, widths, show_from);

    let outcome = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose which modules to update")
        .items(&options)
        .max_length(page_size)
        .report(false)
        .interact_opt();

    resolve_outcome(records, outcome)
}
