use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;
use tickframe_core::Cell;
use tickframe_schema::FieldKind;

/// Coerce one raw value to the cell type its field classification demands.
///
/// Coercion never fails: a value that cannot be parsed becomes the missing
/// marker, and unclassified fields pass through with their source type.
pub fn coerce(value: &Value, kind: FieldKind) -> Cell {
    match kind {
        FieldKind::Numeric => coerce_numeric(value),
        FieldKind::Boolean => coerce_boolean(value),
        FieldKind::Datetime => coerce_datetime(value),
        FieldKind::Identifier => coerce_identifier(value),
        FieldKind::Nested | FieldKind::Unknown => Cell::from_value(value),
    }
}

fn coerce_numeric(value: &Value) -> Cell {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) => Cell::Number(f),
            None => Cell::Missing,
        },
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(f) => Cell::Number(f),
            Err(_) => Cell::Missing,
        },
        Value::Bool(b) => Cell::Number(if *b { 1.0 } else { 0.0 }),
        _ => Cell::Missing,
    }
}

const TRUE_TOKENS: &[&str] = &["true", "t", "1", "yes", "y", "on"];
const FALSE_TOKENS: &[&str] = &["false", "f", "0", "no", "n", "off"];

fn coerce_boolean(value: &Value) -> Cell {
    match value {
        Value::Bool(b) => Cell::Bool(*b),
        Value::String(s) => {
            let token = s.trim().to_ascii_lowercase();
            if TRUE_TOKENS.contains(&token.as_str()) {
                Cell::Bool(true)
            } else if FALSE_TOKENS.contains(&token.as_str()) {
                Cell::Bool(false)
            } else {
                Cell::Missing
            }
        }
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => Cell::Bool(false),
            Some(f) if f == 1.0 => Cell::Bool(true),
            _ => Cell::Missing,
        },
        _ => Cell::Missing,
    }
}

fn coerce_datetime(value: &Value) -> Cell {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(ms) => epoch_millis(ms),
            None => Cell::Missing,
        },
        Value::String(s) => parse_datetime_text(s.trim()),
        _ => Cell::Missing,
    }
}

/// Epoch-millisecond integer to UTC instant
fn epoch_millis(ms: i64) -> Cell {
    match Utc.timestamp_millis_opt(ms) {
        chrono::LocalResult::Single(ts) => Cell::Timestamp(ts),
        _ => Cell::Missing,
    }
}

fn parse_datetime_text(text: &str) -> Cell {
    if text.is_empty() {
        return Cell::Missing;
    }
    // Venues emit epoch milliseconds as strings too
    if text.chars().all(|c| c.is_ascii_digit() || c == '-') {
        if let Ok(ms) = text.parse::<i64>() {
            return epoch_millis(ms);
        }
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Cell::Timestamp(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f") {
        return Cell::Timestamp(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Cell::Timestamp(naive.and_utc());
        }
    }
    Cell::Missing
}

fn coerce_identifier(value: &Value) -> Cell {
    match value {
        Value::String(s) => Cell::Text(s.clone()),
        Value::Number(n) => Cell::Text(n.to_string()),
        Value::Bool(b) => Cell::Text(b.to_string()),
        Value::Null => Cell::Missing,
        other => Cell::Json(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_parses_numbers_and_strings() {
        assert_eq!(coerce(&json!(1.5), FieldKind::Numeric), Cell::Number(1.5));
        assert_eq!(coerce(&json!("2.25"), FieldKind::Numeric), Cell::Number(2.25));
        assert_eq!(coerce(&json!(" 3 "), FieldKind::Numeric), Cell::Number(3.0));
    }

    #[test]
    fn test_numeric_failures_become_missing() {
        assert_eq!(coerce(&json!("abc"), FieldKind::Numeric), Cell::Missing);
        assert_eq!(coerce(&json!(null), FieldKind::Numeric), Cell::Missing);
        assert_eq!(coerce(&json!([1]), FieldKind::Numeric), Cell::Missing);
    }

    #[test]
    fn test_boolean_token_sets() {
        for token in ["true", "T", "1", "yes", "Y", "on"] {
            assert_eq!(
                coerce(&json!(token), FieldKind::Boolean),
                Cell::Bool(true),
                "token {token}"
            );
        }
        for token in ["false", "F", "0", "no", "N", "off"] {
            assert_eq!(
                coerce(&json!(token), FieldKind::Boolean),
                Cell::Bool(false),
                "token {token}"
            );
        }
        assert_eq!(coerce(&json!("maybe"), FieldKind::Boolean), Cell::Missing);
        assert_eq!(coerce(&json!(1), FieldKind::Boolean), Cell::Bool(true));
    }

    #[test]
    fn test_datetime_from_epoch_millis_and_iso() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let ms = expected.timestamp_millis();
        assert_eq!(
            coerce(&json!(ms), FieldKind::Datetime),
            Cell::Timestamp(expected)
        );
        assert_eq!(
            coerce(&json!(ms.to_string()), FieldKind::Datetime),
            Cell::Timestamp(expected)
        );
        assert_eq!(
            coerce(&json!("2024-05-01T00:00:00Z"), FieldKind::Datetime),
            Cell::Timestamp(expected)
        );
        assert_eq!(
            coerce(&json!("2024-05-01 00:00:00"), FieldKind::Datetime),
            Cell::Timestamp(expected)
        );
    }

    #[test]
    fn test_datetime_garbage_becomes_missing() {
        assert_eq!(coerce(&json!("not a date"), FieldKind::Datetime), Cell::Missing);
        assert_eq!(coerce(&json!(true), FieldKind::Datetime), Cell::Missing);
    }

    #[test]
    fn test_identifier_stringifies_scalars() {
        assert_eq!(
            coerce(&json!(12345), FieldKind::Identifier),
            Cell::Text("12345".to_string())
        );
        assert_eq!(
            coerce(&json!("o-1"), FieldKind::Identifier),
            Cell::Text("o-1".to_string())
        );
    }
}
