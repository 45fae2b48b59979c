use tickframe_core::EntityKind;

/// Semantic kind of a known field, driving value coercion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Numeric,
    Boolean,
    Datetime,
    Identifier,
    /// Sub-object expected; flattened into prefixed columns before typing
    Nested,
    /// Not in any registry; kept as-is, untyped
    Unknown,
}

/// One registry entry: canonical field name and its kind.
/// Registry order is the canonical column order of built tables.
pub type ColumnSpec = (&'static str, FieldKind);

use FieldKind::{Boolean, Datetime, Identifier, Nested, Numeric};

const BALANCE_COLUMNS: &[ColumnSpec] = &[
    ("currency", Identifier),
    ("free", Numeric),
    ("used", Numeric),
    ("total", Numeric),
    ("debt", Numeric),
    ("timestamp", Datetime),
];

const ORDER_COLUMNS: &[ColumnSpec] = &[
    ("id", Identifier),
    ("client_order_id", Identifier),
    ("timestamp", Datetime),
    ("last_trade_timestamp", Datetime),
    ("last_update_timestamp", Datetime),
    ("expiration", Datetime),
    ("symbol", Identifier),
    ("type", Identifier),
    ("side", Identifier),
    ("status", Identifier),
    ("time_in_force", Identifier),
    ("price", Numeric),
    ("stop_price", Numeric),
    ("trigger_price", Numeric),
    ("average", Numeric),
    ("amount", Numeric),
    ("filled", Numeric),
    ("remaining", Numeric),
    ("cost", Numeric),
    ("reduce_only", Boolean),
    ("post_only", Boolean),
    ("fee", Nested),
    ("fee_cost", Numeric),
    ("fee_currency", Identifier),
    ("fee_rate", Numeric),
];

const TRADE_COLUMNS: &[ColumnSpec] = &[
    ("id", Identifier),
    ("order_id", Identifier),
    ("timestamp", Datetime),
    ("symbol", Identifier),
    ("type", Identifier),
    ("side", Identifier),
    ("taker_or_maker", Identifier),
    ("price", Numeric),
    ("amount", Numeric),
    ("cost", Numeric),
    ("fee", Nested),
    ("fee_cost", Numeric),
    ("fee_currency", Identifier),
    ("fee_rate", Numeric),
];

const OHLCV_COLUMNS: &[ColumnSpec] = &[
    ("timestamp", Datetime),
    ("open", Numeric),
    ("high", Numeric),
    ("low", Numeric),
    ("close", Numeric),
    ("volume", Numeric),
];

const MARKET_COLUMNS: &[ColumnSpec] = &[
    ("id", Identifier),
    ("symbol", Identifier),
    ("base", Identifier),
    ("quote", Identifier),
    ("settle", Identifier),
    ("active", Boolean),
    ("spot", Boolean),
    ("margin", Boolean),
    ("swap", Boolean),
    ("future", Boolean),
    ("option", Boolean),
    ("contract", Boolean),
    ("linear", Boolean),
    ("inverse", Boolean),
    ("neg_risk", Boolean),
    ("taker", Numeric),
    ("maker", Numeric),
    ("contract_size", Numeric),
    ("tick_size", Numeric),
    ("min_order_size", Numeric),
    ("precision", Nested),
    ("precision_price", Numeric),
    ("precision_amount", Numeric),
    ("limits", Nested),
    ("limits_price_min", Numeric),
    ("limits_price_max", Numeric),
    ("limits_amount_min", Numeric),
    ("limits_amount_max", Numeric),
    ("limits_cost_min", Numeric),
    ("limits_cost_max", Numeric),
    ("created_at", Datetime),
    ("updated_at", Datetime),
];

const FUNDING_RATE_COLUMNS: &[ColumnSpec] = &[
    ("symbol", Identifier),
    ("timestamp", Datetime),
    ("mark_price", Numeric),
    ("index_price", Numeric),
    ("interest_rate", Numeric),
    ("funding_rate", Numeric),
    ("funding_timestamp", Datetime),
    ("next_funding_rate", Numeric),
    ("next_funding_timestamp", Datetime),
    ("previous_funding_rate", Numeric),
    ("previous_funding_timestamp", Datetime),
];

const TICKER_COLUMNS: &[ColumnSpec] = &[
    ("symbol", Identifier),
    ("timestamp", Datetime),
    ("high", Numeric),
    ("low", Numeric),
    ("bid", Numeric),
    ("bid_volume", Numeric),
    ("ask", Numeric),
    ("ask_volume", Numeric),
    ("vwap", Numeric),
    ("open", Numeric),
    ("close", Numeric),
    ("last", Numeric),
    ("previous_close", Numeric),
    ("change", Numeric),
    ("percentage", Numeric),
    ("average", Numeric),
    ("base_volume", Numeric),
    ("quote_volume", Numeric),
];

const TRANSFER_COLUMNS: &[ColumnSpec] = &[
    ("id", Identifier),
    ("txid", Identifier),
    ("timestamp", Datetime),
    ("currency", Identifier),
    ("network", Identifier),
    ("address", Identifier),
    ("tag", Identifier),
    ("type", Identifier),
    ("status", Identifier),
    ("amount", Numeric),
    ("updated", Datetime),
    ("fee", Nested),
    ("fee_cost", Numeric),
    ("fee_currency", Identifier),
];

const ACCOUNT_COLUMNS: &[ColumnSpec] = &[
    ("id", Identifier),
    ("type", Identifier),
    ("code", Identifier),
    ("name", Identifier),
];

const GREEK_COLUMNS: &[ColumnSpec] = &[
    ("symbol", Identifier),
    ("timestamp", Datetime),
    ("delta", Numeric),
    ("gamma", Numeric),
    ("theta", Numeric),
    ("vega", Numeric),
    ("rho", Numeric),
    ("implied_volatility", Numeric),
    ("underlying_price", Numeric),
];

const BORROW_RATE_COLUMNS: &[ColumnSpec] = &[
    ("currency", Identifier),
    ("rate", Numeric),
    ("period", Numeric),
    ("timestamp", Datetime),
];

// Ladder rows plus the container meta carried onto every row
const ORDER_BOOK_COLUMNS: &[ColumnSpec] = &[
    ("price", Numeric),
    ("amount", Numeric),
    ("side", Identifier),
    ("market", Identifier),
    ("asset_id", Identifier),
    ("symbol", Identifier),
    ("timestamp", Datetime),
    ("hash", Identifier),
    ("event_type", Identifier),
    ("min_order_size", Numeric),
    ("tick_size", Numeric),
    ("neg_risk", Boolean),
];

/// Canonical column registry for an entity kind, in canonical column order
pub fn registry(kind: EntityKind) -> &'static [ColumnSpec] {
    match kind {
        EntityKind::Balance => BALANCE_COLUMNS,
        EntityKind::Order => ORDER_COLUMNS,
        EntityKind::Trade => TRADE_COLUMNS,
        EntityKind::Ohlcv => OHLCV_COLUMNS,
        EntityKind::Market => MARKET_COLUMNS,
        EntityKind::FundingRate => FUNDING_RATE_COLUMNS,
        EntityKind::Ticker => TICKER_COLUMNS,
        EntityKind::Transfer => TRANSFER_COLUMNS,
        EntityKind::Account => ACCOUNT_COLUMNS,
        EntityKind::Greek => GREEK_COLUMNS,
        EntityKind::BorrowRate => BORROW_RATE_COLUMNS,
        EntityKind::OrderBook => ORDER_BOOK_COLUMNS,
    }
}

/// Classify a canonical field name for an entity kind.
///
/// Pure lookup; fields absent from the registry are `Unknown` and pass
/// through untyped rather than failing.
pub fn classify(kind: EntityKind, canonical_field: &str) -> FieldKind {
    registry(kind)
        .iter()
        .find(|(name, _)| *name == canonical_field)
        .map(|(_, field_kind)| *field_kind)
        .unwrap_or(FieldKind::Unknown)
}
