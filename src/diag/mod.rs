//! Diagnostics over the value codec and the search routine
//!
//! - [`catalog`]: a labelled set of sample values covering every kind, with
//!   the storage their addresses point into
//! - [`report`]: line-oriented description of a single value
//! - [`bench`]: timed conversion and search loops that check their own results
//! - [`constants`]: defaults for the driver and the inspector
//!
//! `tval check` prints the catalog through [`report`], `tval perf` runs
//! [`bench`], and the inspector in [`crate::ui`] browses the catalog.

pub mod bench;
pub mod catalog;
pub mod constants;
pub mod report;
