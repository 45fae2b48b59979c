use log::{debug, warn};
use rust_decimal::Decimal;
use tickframe_core::{MarketLimits, OrderKind, OrderParams};
use tickframe_ports::{BoundsPolicy, GateConfig, GateError, GateResult, OrderGate};

use crate::round::{round_amount, round_price};

/// Order preprocessor enforcing exchange-reported market limits.
///
/// Processing order: amount derivation for cost-based market orders,
/// precision rounding, price bounds, amount bounds, notional bounds.
/// Contradictory bounds (min > max) resolve with the maximum applied first
/// and the minimum second, so the minimum wins.
pub struct LimitGate {
    config: GateConfig,
}

impl LimitGate {
    /// Create a gate with the default (clip-and-warn) configuration
    pub fn new() -> Self {
        Self {
            config: GateConfig::default(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(config: GateConfig) -> Self {
        Self { config }
    }

    /// Get the gate configuration
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    fn preprocess_inner(
        &self,
        mut order: OrderParams,
        limits: &MarketLimits,
        reference_price: Option<Decimal>,
        clips: &mut ClipLog,
    ) -> GateResult<OrderParams> {
        if order.kind != OrderKind::Market && order.price.is_none() {
            return Err(GateError::MissingPrice {
                symbol: order.symbol.clone(),
            });
        }

        // 1. Cost-based market order: derive amount from the best available
        //    reference price; with no derivable price, cost passes through
        //    for the venue to handle.
        if order.kind == OrderKind::Market && order.amount.is_none() {
            if let Some(cost) = order.cost {
                let reference = reference_price.or(order.price).filter(|p| *p > Decimal::ZERO);
                if let Some(reference) = reference {
                    order.amount = Some(cost / reference);
                    debug!(
                        "derived amount {} from cost {} at reference price {} for {}",
                        cost / reference,
                        cost,
                        reference,
                        order.symbol
                    );
                }
            }
        }

        // 2. Round to the market's declared precision; unreported precision
        //    means no rounding.
        if let (Some(price), Some(precision)) = (order.price, limits.price_precision.as_ref()) {
            order.price = Some(round_price(price, precision));
        }
        if let (Some(amount), Some(precision)) = (order.amount, limits.amount_precision.as_ref()) {
            order.amount = Some(round_amount(amount, precision));
        }

        // 3. Price bounds
        if let Some(price) = order.price {
            let mut clamped = price;
            if let Some(max) = limits.max_price {
                if clamped > max {
                    if self.config.price_out_of_range == BoundsPolicy::Reject {
                        return Err(GateError::PriceAboveMax {
                            symbol: order.symbol.clone(),
                            price,
                            max,
                        });
                    }
                    clamped = max;
                }
            }
            let min = limits.min_price_or_zero();
            if clamped < min {
                if self.config.price_out_of_range == BoundsPolicy::Reject {
                    return Err(GateError::PriceBelowMin {
                        symbol: order.symbol.clone(),
                        price,
                        min,
                    });
                }
                clamped = min;
            }
            if clamped != price {
                clips.price.push(format!("price {price} -> {clamped}"));
                order.price = Some(clamped);
            }
        }

        // 4. Amount bounds
        if let Some(amount) = order.amount {
            let mut clamped = amount;
            if let Some(max) = limits.max_amount {
                if clamped > max {
                    if self.config.volume_out_of_range == BoundsPolicy::Reject {
                        return Err(GateError::AmountAboveMax {
                            symbol: order.symbol.clone(),
                            amount,
                            max,
                        });
                    }
                    clamped = max;
                }
            }
            let min = limits.min_amount_or_zero();
            if clamped < min {
                if self.config.volume_out_of_range == BoundsPolicy::Reject {
                    return Err(GateError::AmountBelowMin {
                        symbol: order.symbol.clone(),
                        amount,
                        min,
                    });
                }
                clamped = min;
            }
            if clamped != amount {
                clips.volume.push(format!("amount {amount} -> {clamped}"));
                order.amount = Some(clamped);
            }
        }

        // 5. Notional bounds; clamping re-derives amount when a price is
        //    known, otherwise adjusts the pass-through cost.
        if let Some(notional) = order.notional() {
            let mut clamped = notional;
            if let Some(max) = limits.max_cost {
                if clamped > max {
                    if self.config.volume_out_of_range == BoundsPolicy::Reject {
                        return Err(GateError::CostAboveMax {
                            symbol: order.symbol.clone(),
                            cost: notional,
                            max,
                        });
                    }
                    clamped = max;
                }
            }
            let min = limits.min_cost_or_zero();
            if clamped < min {
                if self.config.volume_out_of_range == BoundsPolicy::Reject {
                    return Err(GateError::CostBelowMin {
                        symbol: order.symbol.clone(),
                        cost: notional,
                        min,
                    });
                }
                clamped = min;
            }
            if clamped != notional {
                clips.volume.push(format!("cost {notional} -> {clamped}"));
                match order.price.filter(|p| *p > Decimal::ZERO) {
                    Some(price) if order.amount.is_some() => {
                        let mut amount = clamped / price;
                        if let Some(precision) = limits.amount_precision.as_ref() {
                            amount = round_amount(amount, precision);
                        }
                        order.amount = Some(amount);
                    }
                    _ => {
                        if order.cost.is_some() {
                            order.cost = Some(clamped);
                        }
                    }
                }
            }
        }

        Ok(order)
    }
}

impl Default for LimitGate {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderGate for LimitGate {
    fn preprocess(
        &self,
        order: OrderParams,
        limits: &MarketLimits,
        reference_price: Option<Decimal>,
    ) -> GateResult<OrderParams> {
        let mut clips = ClipLog::default();
        let symbol = order.symbol.clone();
        let order = self.preprocess_inner(order, limits, reference_price, &mut clips)?;
        for clip in clips.warnable(&self.config) {
            warn!("clipped order for {symbol}: {clip}");
        }
        Ok(order)
    }

    fn preprocess_batch(
        &self,
        orders: Vec<OrderParams>,
        limits: &MarketLimits,
        reference_price: Option<Decimal>,
    ) -> GateResult<Vec<OrderParams>> {
        let total = orders.len();
        let mut processed = Vec::with_capacity(total);
        let mut clipped_rows = 0usize;
        let mut symbol = None;

        for order in orders {
            let mut clips = ClipLog::default();
            symbol.get_or_insert_with(|| order.symbol.clone());
            processed.push(self.preprocess_inner(order, limits, reference_price, &mut clips)?);
            if !clips.warnable(&self.config).is_empty() {
                clipped_rows += 1;
            }
        }

        // One warning per non-empty batch; an empty batch stays silent
        if clipped_rows > 0 {
            warn!(
                "clipped {clipped_rows} of {total} orders for {}",
                symbol.as_deref().unwrap_or("?")
            );
        }
        Ok(processed)
    }
}

/// Clips recorded during one preprocessing pass, split by which policy
/// governs them
#[derive(Debug, Default)]
struct ClipLog {
    price: Vec<String>,
    volume: Vec<String>,
}

impl ClipLog {
    /// Clips whose governing policy is `Warn`
    fn warnable(&self, config: &GateConfig) -> Vec<&str> {
        let mut out = Vec::new();
        if config.price_out_of_range == BoundsPolicy::Warn {
            out.extend(self.price.iter().map(String::as_str));
        }
        if config.volume_out_of_range == BoundsPolicy::Warn {
            out.extend(self.volume.iter().map(String::as_str));
        }
        out
    }
}
