use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;
use tickframe_core::{MarketLimits, Precision, Record};
use tickframe_ports::MarketCatalog;
use tickframe_schema::{MAX_FLATTEN_DEPTH, flatten_record};

/// In-memory market catalog, loaded once from a markets response.
///
/// Read-only after construction; the preprocessing path only looks limits up.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    limits: HashMap<String, MarketLimits>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog built from raw market records, keyed by their symbol field
    pub fn from_market_records(records: &[Record]) -> Self {
        let mut catalog = Self::new();
        for record in records {
            let flat = flatten_record(record, MAX_FLATTEN_DEPTH);
            let symbol = flat
                .get("symbol")
                .or_else(|| flat.get("id"))
                .and_then(Value::as_str);
            if let Some(symbol) = symbol {
                catalog.insert(symbol, limits_from_market_record(record));
            }
        }
        catalog
    }

    pub fn insert(&mut self, symbol: impl Into<String>, limits: MarketLimits) {
        self.limits.insert(symbol.into(), limits);
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

impl MarketCatalog for StaticCatalog {
    fn limits(&self, symbol: &str) -> Option<MarketLimits> {
        self.limits.get(symbol).cloned()
    }

    fn name(&self) -> &str {
        "StaticCatalog"
    }
}

/// Extract market limits from one raw market record.
///
/// Understands both limit conventions seen across venues: nested
/// `precision`/`limits` blocks (flattened to `precision_price`,
/// `limits_amount_min`, ...) and flat `tick_size`/`min_order_size` fields.
/// Anything the record does not report stays absent.
pub fn limits_from_market_record(record: &Record) -> MarketLimits {
    let flat = flatten_record(record, MAX_FLATTEN_DEPTH);
    let decimal = |key: &str| flat.get(key).and_then(to_decimal);

    let mut limits = MarketLimits::unbounded();
    limits.price_precision = decimal("tick_size")
        .map(Precision::TickSize)
        .or_else(|| decimal("precision_price").map(to_precision));
    limits.amount_precision = decimal("precision_amount").map(to_precision);
    limits.min_price = decimal("limits_price_min");
    limits.max_price = decimal("limits_price_max");
    limits.min_amount = decimal("limits_amount_min").or_else(|| decimal("min_order_size"));
    limits.max_amount = decimal("limits_amount_max");
    limits.min_cost = decimal("limits_cost_min");
    limits.max_cost = decimal("limits_cost_max");
    limits
}

/// Integer precision values are decimal-digit counts, fractional ones are
/// tick sizes
fn to_precision(value: Decimal) -> Precision {
    match value.to_u32() {
        Some(places) if value.is_integer() => Precision::DecimalPlaces(places),
        _ => Precision::TickSize(value),
    }
}

fn to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}
