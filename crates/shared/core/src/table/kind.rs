use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classification tag selecting which schema and type rules apply to a batch
/// of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Balance,
    Order,
    Trade,
    Ohlcv,
    Market,
    FundingRate,
    Ticker,
    /// Deposits and withdrawals share one schema
    Transfer,
    Account,
    Greek,
    BorrowRate,
    OrderBook,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Balance => "balance",
            EntityKind::Order => "order",
            EntityKind::Trade => "trade",
            EntityKind::Ohlcv => "ohlcv",
            EntityKind::Market => "market",
            EntityKind::FundingRate => "funding-rate",
            EntityKind::Ticker => "ticker",
            EntityKind::Transfer => "transfer",
            EntityKind::Account => "account",
            EntityKind::Greek => "greek",
            EntityKind::BorrowRate => "borrow-rate",
            EntityKind::OrderBook => "order-book",
        }
    }

    /// All kinds, in a stable order
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Balance,
            EntityKind::Order,
            EntityKind::Trade,
            EntityKind::Ohlcv,
            EntityKind::Market,
            EntityKind::FundingRate,
            EntityKind::Ticker,
            EntityKind::Transfer,
            EntityKind::Account,
            EntityKind::Greek,
            EntityKind::BorrowRate,
            EntityKind::OrderBook,
        ]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    /// Accepts both separator conventions ("funding-rate" / "funding_rate")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase().replace('_', "-");
        match tag.as_str() {
            "balance" => Ok(EntityKind::Balance),
            "order" => Ok(EntityKind::Order),
            "trade" => Ok(EntityKind::Trade),
            "ohlcv" | "candle" | "ohlcv-candle" => Ok(EntityKind::Ohlcv),
            "market" => Ok(EntityKind::Market),
            "funding-rate" => Ok(EntityKind::FundingRate),
            "ticker" => Ok(EntityKind::Ticker),
            "transfer" | "deposit" | "withdrawal" => Ok(EntityKind::Transfer),
            "account" => Ok(EntityKind::Account),
            "greek" => Ok(EntityKind::Greek),
            "borrow-rate" => Ok(EntityKind::BorrowRate),
            "order-book" | "orderbook" => Ok(EntityKind::OrderBook),
            other => Err(format!("unknown entity kind: {other}")),
        }
    }
}
