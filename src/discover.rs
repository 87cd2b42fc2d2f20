//! Discovery of available module updates
//!
//! Invokes the listing command once and parses its line-oriented output
//! into update records. Discovery is all-or-nothing: a single line that
//! does not match the expected pattern aborts the whole pass.

use crate::domain::{UpdateRecord, Version};
use crate::error::{DiscoveryError, ParseError};
use crate::progress::Progress;
use crate::toolchain::ModuleToolchain;
use regex::Regex;
use std::sync::LazyLock;

/// Line the listing command emits for modules with nothing to report
const NO_UPDATE_SENTINEL: &str = "''";

// One candidate per line: '<name>: <from> -> <to>'
static UPDATE_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'(?P<name>.+): (?P<from>.+) -> (?P<to>.+)'").unwrap());

/// Runs one discovery pass against the given toolchain.
///
/// Emission order of the listing command is preserved. When `verbose` is
/// set, one diagnostic line is printed per discovered module; that output
/// is not part of the functional contract.
pub fn discover(
    toolchain: &dyn ModuleToolchain,
    verbose: bool,
    progress: &mut Progress,
) -> Result<Vec<UpdateRecord>, DiscoveryError> {
    progress.spinner("Discovering modules...");
    let listing = toolchain.list_updates();
    progress.finish_and_clear();
    let listing = listing?;

    let mut records = Vec::new();
    for line in listing.lines() {
        if line.is_empty() || line == NO_UPDATE_SENTINEL {
            continue;
        }

        let caps = UPDATE_LINE_RE
            .captures(line)
            .ok_or_else(|| ParseError::new(line))?;
        let name = &caps["name"];
        let from_text = &caps["from"];
        let to_text = &caps["to"];

        if verbose {
            println!("Found module {name}, from {from_text} to {to_text}");
        }

        let from = Version::parse(from_text)?;
        let to = Version::parse(to_text)?;
        records.push(UpdateRecord::new(name, from, to));
    }

    Ok(records)
}
