//! gomodup - interactive Go module updater library
//!
//! Pipeline: discover available updates from the Go toolchain, classify and
//! render each version delta, let the operator select a subset, and apply
//! the upgrades one module at a time.

pub mod apply;
pub mod cli;
pub mod discover;
pub mod domain;
pub mod error;
pub mod output;
pub mod progress;
pub mod select;
pub mod toolchain;
