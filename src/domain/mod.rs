//! Core domain types
//!
//! - Version: parsed semantic version with semver-precedence ordering
//! - DiffSeverity: display classification of a version delta
//! - UpdateRecord: one discoverable module upgrade

pub mod update;
pub mod version;

pub use update::UpdateRecord;
pub use version::{classify, DiffSeverity, Version};
