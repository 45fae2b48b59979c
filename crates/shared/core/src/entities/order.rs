use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Side;
use crate::table::Record;
use crate::values::Symbol;

/// Order kinds accepted by the preprocessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    /// Execute at current market price
    Market,
    /// Execute at specified price or better
    Limit,
}

/// Caller-supplied order parameters, before validation.
///
/// Constructed by the caller, preprocessed (clamped/rounded/validated) by the
/// gate, then handed to the external transmission collaborator. The core
/// never owns an order past that point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderParams {
    pub id: Uuid,
    pub symbol: Symbol,
    pub side: Side,
    pub kind: OrderKind,
    /// Base quantity; may be absent for cost-based market orders
    pub amount: Option<Decimal>,
    /// Required for limit orders
    pub price: Option<Decimal>,
    /// Quote notional; drives amount derivation for market orders
    pub cost: Option<Decimal>,
    /// Extra venue-specific parameters, passed through untouched
    pub params: Record,
}

impl OrderParams {
    pub fn limit(
        symbol: impl Into<Symbol>,
        side: Side,
        amount: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into(),
            side,
            kind: OrderKind::Limit,
            amount: Some(amount),
            price: Some(price),
            cost: None,
            params: Record::new(),
        }
    }

    pub fn market(symbol: impl Into<Symbol>, side: Side, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into(),
            side,
            kind: OrderKind::Market,
            amount: Some(amount),
            price: None,
            cost: None,
            params: Record::new(),
        }
    }

    /// Market order sized by quote cost instead of base amount
    pub fn market_by_cost(symbol: impl Into<Symbol>, side: Side, cost: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into(),
            side,
            kind: OrderKind::Market,
            amount: None,
            price: None,
            cost: Some(cost),
            params: Record::new(),
        }
    }

    pub fn with_params(mut self, params: Record) -> Self {
        self.params = params;
        self
    }

    /// Notional value: `price * amount` when both are known, else the
    /// caller-supplied cost
    pub fn notional(&self) -> Option<Decimal> {
        match (self.price, self.amount) {
            (Some(price), Some(amount)) => Some(price * amount),
            _ => self.cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_notional_prefers_price_times_amount() {
        let order = OrderParams::limit("BTC/USD", Side::Buy, dec!(2), dec!(100));
        assert_eq!(order.notional(), Some(dec!(200)));
    }

    #[test]
    fn test_notional_falls_back_to_cost() {
        let order = OrderParams::market_by_cost("BTC/USD", Side::Buy, dec!(500));
        assert_eq!(order.notional(), Some(dec!(500)));

        let order = OrderParams::market("BTC/USD", Side::Sell, dec!(1));
        assert_eq!(order.notional(), None);
    }
}
