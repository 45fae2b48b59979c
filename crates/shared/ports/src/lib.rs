//! Tickframe Ports
//!
//! Port definitions (traits) for the tickframe response adapter.
//! These define the boundaries between the pure transforms and the external
//! exchange-client collaborator.

mod catalog;
mod error;
mod gate;

pub use catalog::MarketCatalog;
pub use error::{GateError, GateResult};
pub use gate::{BoundsPolicy, GateConfig, OrderGate};
