use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Precision semantics an exchange can declare for a market.
///
/// Some venues report the number of allowed decimal digits, others a minimum
/// price/amount increment (tick or step size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Precision {
    DecimalPlaces(u32),
    TickSize(Decimal),
}

/// Per-market precision and min/max bounds for price, amount, and cost,
/// as reported by the exchange.
///
/// Every field is optional: a missing minimum acts as 0 and a missing maximum
/// as unbounded, so bound checks never spuriously fail on absent data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketLimits {
    pub price_precision: Option<Precision>,
    pub amount_precision: Option<Precision>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub min_cost: Option<Decimal>,
    pub max_cost: Option<Decimal>,
}

impl MarketLimits {
    /// Limits with every bound and precision absent
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Effective minimum price (absent = 0)
    pub fn min_price_or_zero(&self) -> Decimal {
        self.min_price.unwrap_or(Decimal::ZERO)
    }

    /// Effective minimum amount (absent = 0)
    pub fn min_amount_or_zero(&self) -> Decimal {
        self.min_amount.unwrap_or(Decimal::ZERO)
    }

    /// Effective minimum cost (absent = 0)
    pub fn min_cost_or_zero(&self) -> Decimal {
        self.min_cost.unwrap_or(Decimal::ZERO)
    }

    pub fn with_price_range(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_amount_range(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    pub fn with_cost_range(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_cost = min;
        self.max_cost = max;
        self
    }

    pub fn with_price_precision(mut self, precision: Precision) -> Self {
        self.price_precision = Some(precision);
        self
    }

    pub fn with_amount_precision(mut self, precision: Precision) -> Self {
        self.amount_precision = Some(precision);
        self
    }
}
