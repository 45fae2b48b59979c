use chrono::{TimeZone, Utc};
use serde_json::Value;
use tickframe_core::Record;
use tickframe_schema::{canonical_key, wire_key};

/// Clean an outgoing request-parameter bag before it reaches the wire.
///
/// Nulls, empty strings, and empty lists are dropped (non-empty lists are
/// kept as-is), epoch-millisecond values of date/time parameters become
/// ISO-8601 strings, and keys are converted to the wire's lowerCamelCase.
pub fn clean_params(params: &Record) -> Record {
    let mut cleaned = Record::new();
    for (raw_key, value) in params {
        match value {
            Value::Null => continue,
            Value::String(s) if s.is_empty() => continue,
            Value::Array(items) if items.is_empty() => continue,
            _ => {}
        }
        let canonical = canonical_key(raw_key);
        let value = if is_date_param(&canonical) {
            iso_format(value)
        } else {
            value.clone()
        };
        cleaned.insert(wire_key(&canonical), value);
    }
    cleaned
}

fn is_date_param(canonical: &str) -> bool {
    canonical.contains("date") || canonical.contains("timestamp") || canonical.contains("time")
}

/// Epoch-millisecond numbers of date parameters to ISO-8601; everything else
/// passes through untouched
fn iso_format(value: &Value) -> Value {
    let Some(ms) = value.as_i64() else {
        return value.clone();
    };
    match Utc.timestamp_millis_opt(ms) {
        chrono::LocalResult::Single(ts) => Value::String(ts.to_rfc3339()),
        _ => value.clone(),
    }
}
