use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tickframe_core::{MarketLimits, OrderParams};

use crate::error::GateResult;

/// What to do when a price or amount violates market bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundsPolicy {
    /// Clamp to the violated bound silently
    Clip,
    /// Clamp to the violated bound and emit a warning
    Warn,
    /// Reject the order with an error, leaving it unchanged
    Reject,
}

impl FromStr for BoundsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clip" => Ok(BoundsPolicy::Clip),
            "warn" => Ok(BoundsPolicy::Warn),
            "raise" | "reject" => Ok(BoundsPolicy::Reject),
            other => Err(format!("unknown bounds policy: {other}")),
        }
    }
}

/// Configuration for the order preprocessor.
///
/// Price and volume (amount/cost) violations carry independent policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    pub price_out_of_range: BoundsPolicy,
    pub volume_out_of_range: BoundsPolicy,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            price_out_of_range: BoundsPolicy::Warn,
            volume_out_of_range: BoundsPolicy::Warn,
        }
    }
}

impl GateConfig {
    pub fn with_policies(price: BoundsPolicy, volume: BoundsPolicy) -> Self {
        Self {
            price_out_of_range: price,
            volume_out_of_range: volume,
        }
    }
}

/// Port for order-parameter preprocessing.
///
/// Implementations validate, round, and clamp caller-supplied order
/// parameters against exchange-reported market limits before the order is
/// handed to the transmission collaborator.
pub trait OrderGate {
    /// Preprocess a single order.
    ///
    /// `reference_price` is the best available market price (e.g. last trade
    /// or mid); it drives amount derivation for cost-based market orders.
    fn preprocess(
        &self,
        order: OrderParams,
        limits: &MarketLimits,
        reference_price: Option<Decimal>,
    ) -> GateResult<OrderParams>;

    /// Preprocess a batch of orders against one market.
    ///
    /// Warns at most once per non-empty batch when rows were clipped; an
    /// empty batch never warns.
    fn preprocess_batch(
        &self,
        orders: Vec<OrderParams>,
        limits: &MarketLimits,
        reference_price: Option<Decimal>,
    ) -> GateResult<Vec<OrderParams>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!("clip".parse::<BoundsPolicy>().unwrap(), BoundsPolicy::Clip);
        assert_eq!("warn".parse::<BoundsPolicy>().unwrap(), BoundsPolicy::Warn);
        assert_eq!("raise".parse::<BoundsPolicy>().unwrap(), BoundsPolicy::Reject);
        assert!("clamp".parse::<BoundsPolicy>().is_err());
    }

    #[test]
    fn test_default_config_warns() {
        let config = GateConfig::default();
        assert_eq!(config.price_out_of_range, BoundsPolicy::Warn);
        assert_eq!(config.volume_out_of_range, BoundsPolicy::Warn);
    }
}
