use rust_decimal::Decimal;
use thiserror::Error;

/// Order preprocessing errors.
///
/// Out-of-range variants are only surfaced under `BoundsPolicy::Reject`;
/// the clip policies recover by clamping instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("price {price} below minimum {min} for {symbol}")]
    PriceBelowMin {
        symbol: String,
        price: Decimal,
        min: Decimal,
    },

    #[error("price {price} above maximum {max} for {symbol}")]
    PriceAboveMax {
        symbol: String,
        price: Decimal,
        max: Decimal,
    },

    #[error("amount {amount} below minimum {min} for {symbol}")]
    AmountBelowMin {
        symbol: String,
        amount: Decimal,
        min: Decimal,
    },

    #[error("amount {amount} above maximum {max} for {symbol}")]
    AmountAboveMax {
        symbol: String,
        amount: Decimal,
        max: Decimal,
    },

    #[error("cost {cost} below minimum {min} for {symbol}")]
    CostBelowMin {
        symbol: String,
        cost: Decimal,
        min: Decimal,
    },

    #[error("cost {cost} above maximum {max} for {symbol}")]
    CostAboveMax {
        symbol: String,
        cost: Decimal,
        max: Decimal,
    },

    #[error("non-market order for {symbol} must include a price")]
    MissingPrice { symbol: String },
}

pub type GateResult<T> = std::result::Result<T, GateError>;
