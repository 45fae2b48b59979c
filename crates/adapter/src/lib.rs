//! Tickframe Adapter
//!
//! The caller-facing assembly of the tickframe pieces: one configuration,
//! an explicit (entity kind -> builder function) registry populated at
//! construction, the order gate, and bounded-concurrency batch helpers.
//! The external exchange client supplies raw records and market limits and
//! transmits validated orders; nothing here performs network I/O.

mod adapter;
mod catalog;
mod config;
mod params;

pub use adapter::{BuildFn, ResponseAdapter};
pub use catalog::{StaticCatalog, limits_from_market_record};
pub use config::AdapterConfig;
pub use params::clean_params;

// The rest of the caller-facing API, re-exported for one-stop imports
pub use tickframe_batch::{paginate, run_all, run_all_nested, run_all_settled};
pub use tickframe_core::{
    Cell, Column, ColumnKind, EntityKind, MarketLimits, OrderKind, OrderParams, Precision, Record,
    Side, Table,
};
pub use tickframe_frame::{FrameConfig, TableBuilder, build_table};
pub use tickframe_gate::LimitGate;
pub use tickframe_ports::{BoundsPolicy, GateConfig, GateError, GateResult, MarketCatalog, OrderGate};
