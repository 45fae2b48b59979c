//! Tickframe Frame
//!
//! The response-to-table normalization engine: converts heterogeneous,
//! inconsistently-cased records from the exchange collaborator into uniform
//! typed tables. Pure and synchronous; concurrency belongs to the caller.

mod build;
mod coerce;
mod join;
mod orderbook;

pub use build::{FrameConfig, TableBuilder};
pub use coerce::coerce;

use tickframe_core::{EntityKind, Record, Table};

/// Build a typed table from raw records with the default configuration.
///
/// Convenience for one-off calls; construct a [`TableBuilder`] to reuse a
/// configuration.
pub fn build_table(records: &[Record], kind: EntityKind) -> Table {
    TableBuilder::new().build(records, kind)
}
