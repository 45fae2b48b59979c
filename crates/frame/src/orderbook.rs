use serde_json::Value;
use tickframe_core::{EntityKind, Record, Table};
use tickframe_schema::canonical_key;

use crate::build::TableBuilder;

// Ladder-level field aliases seen across venues ("px"/"sz" compact feeds,
// "size" CLOB books)
fn level_field(raw: &str) -> String {
    let key = canonical_key(raw);
    match key.as_str() {
        "px" => "price".to_string(),
        "sz" | "size" | "quantity" | "qty" => "amount".to_string(),
        _ => key,
    }
}

impl TableBuilder {
    /// Flatten an order-book payload (separate bid/ask ladders) into one
    /// table with a `side` column.
    ///
    /// A level is either a `[price, amount]` pair array or an object; scalar
    /// fields of the container (market, timestamp, hash, ...) are carried
    /// onto every row. Two empty ladders produce an empty table, not an
    /// error.
    pub fn build_order_book(&self, book: &Record) -> Table {
        let mut meta: Vec<(String, Value)> = Vec::new();
        let mut bids: &[Value] = &[];
        let mut asks: &[Value] = &[];

        for (raw_key, value) in book {
            match (canonical_key(raw_key).as_str(), value) {
                ("bids", Value::Array(levels)) => bids = levels,
                ("asks", Value::Array(levels)) => asks = levels,
                (_, Value::Array(_) | Value::Object(_)) => {}
                (key, scalar) => meta.push((key.to_string(), scalar.clone())),
            }
        }

        let mut rows: Vec<Record> = Vec::with_capacity(bids.len() + asks.len());
        for (side, levels) in [("bid", bids), ("ask", asks)] {
            for level in levels {
                if let Some(mut row) = level_to_record(level) {
                    row.insert("side".to_string(), Value::String(side.to_string()));
                    for (key, value) in &meta {
                        row.entry(key.clone()).or_insert_with(|| value.clone());
                    }
                    rows.push(row);
                }
            }
        }

        self.build(&rows, EntityKind::OrderBook)
    }
}

fn level_to_record(level: &Value) -> Option<Record> {
    match level {
        Value::Array(pair) if pair.len() >= 2 => {
            let mut row = Record::new();
            row.insert("price".to_string(), pair[0].clone());
            row.insert("amount".to_string(), pair[1].clone());
            Some(row)
        }
        Value::Object(fields) => {
            let mut row = Record::new();
            for (raw_key, value) in fields {
                row.insert(level_field(raw_key), value.clone());
            }
            Some(row)
        }
        _ => None,
    }
}
