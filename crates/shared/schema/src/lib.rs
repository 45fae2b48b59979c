//! Tickframe Schema
//!
//! Field-name canonicalization and the static per-entity-kind column
//! registries. Both are pure lookups/transforms: no I/O, no global mutable
//! state. The registries are read-only data; adding a field to one never
//! requires touching the table builder.

mod classify;
mod normalize;

pub use classify::{ColumnSpec, FieldKind, classify, registry};
pub use normalize::{MAX_FLATTEN_DEPTH, canonical_key, flatten_record, wire_key};
