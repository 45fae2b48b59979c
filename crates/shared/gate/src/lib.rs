//! Tickframe Gate
//!
//! Order-parameter preprocessing: validates or clamps price, amount, and
//! notional cost against exchange-reported market limits, rounds to the
//! market's declared precision, and derives amount from cost for market
//! orders. Pure and synchronous; callable identically from blocking and
//! async contexts.

mod limit;
mod round;

pub use limit::LimitGate;
pub use round::{round_amount, round_price};
