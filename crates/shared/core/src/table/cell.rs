use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One typed value in a table column.
///
/// Absence is a first-class variant rather than NaN or a null sentinel, so
/// boolean and datetime columns stay well-typed even with gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// Explicit missing-value marker, distinct from zero or false
    Missing,
    Bool(bool),
    Number(f64),
    Timestamp(DateTime<Utc>),
    Text(String),
    /// Pass-through for values that are neither scalar nor flattened
    /// (arrays, objects beyond the flatten depth)
    Json(Value),
}

impl Cell {
    /// Returns true for the missing-value marker
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Convert back to a JSON value for re-ingestion.
    ///
    /// Timestamps serialize as RFC 3339 so a rebuilt table parses them back
    /// into the same instant. Missing maps to `None` (the key is omitted).
    pub fn to_value(&self) -> Option<Value> {
        match self {
            Cell::Missing => None,
            Cell::Bool(b) => Some(Value::Bool(*b)),
            Cell::Number(n) => serde_json::Number::from_f64(*n).map(Value::Number),
            Cell::Timestamp(ts) => Some(Value::String(
                ts.to_rfc3339_opts(SecondsFormat::Millis, true),
            )),
            Cell::Text(s) => Some(Value::String(s.clone())),
            Cell::Json(v) => Some(v.clone()),
        }
    }

    /// Untyped pass-through conversion for unclassified fields.
    ///
    /// Scalars keep their natural type; arrays and objects ride along as
    /// `Json`; JSON null is the missing marker.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Cell::Missing,
            Value::Bool(b) => Cell::Bool(*b),
            Value::Number(n) => match n.as_f64() {
                Some(f) => Cell::Number(f),
                None => Cell::Text(n.to_string()),
            },
            Value::String(s) => Cell::Text(s.clone()),
            other => Cell::Json(other.clone()),
        }
    }

    /// Numeric view of the cell, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean view of the cell, if it has one
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Text view of the cell, if it has one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Timestamp view of the cell, if it has one
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Cell::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_missing_is_distinct_from_zero_and_false() {
        assert!(Cell::Missing.is_missing());
        assert!(!Cell::Number(0.0).is_missing());
        assert!(!Cell::Bool(false).is_missing());
        assert_ne!(Cell::Missing, Cell::Number(0.0));
        assert_ne!(Cell::Missing, Cell::Bool(false));
    }

    #[test]
    fn test_timestamp_round_trips_through_value() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let value = Cell::Timestamp(ts).to_value().unwrap();
        let text = value.as_str().unwrap();
        let parsed = DateTime::parse_from_rfc3339(text).unwrap().with_timezone(&Utc);
        assert_eq!(parsed, ts);
    }

    #[test]
    fn test_missing_serializes_to_absent_value() {
        assert_eq!(Cell::Missing.to_value(), None);
    }

    #[test]
    fn test_from_value_pass_through() {
        assert_eq!(Cell::from_value(&serde_json::json!(true)), Cell::Bool(true));
        assert_eq!(Cell::from_value(&serde_json::json!(1.5)), Cell::Number(1.5));
        assert_eq!(
            Cell::from_value(&serde_json::json!("abc")),
            Cell::Text("abc".to_string())
        );
        assert_eq!(Cell::from_value(&serde_json::Value::Null), Cell::Missing);
        assert!(matches!(
            Cell::from_value(&serde_json::json!([1, 2])),
            Cell::Json(_)
        ));
    }
}
