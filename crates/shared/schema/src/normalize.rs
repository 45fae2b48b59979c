use serde_json::Value;
use tickframe_core::Record;

/// Maximum nesting depth flattened into prefixed columns.
///
/// Anything deeper rides along as a pass-through JSON cell, bounding column
/// expansion on pathological payloads.
pub const MAX_FLATTEN_DEPTH: usize = 3;

/// Convert a raw field name to its canonical snake_case form.
///
/// Exchanges mix two conventions for the same semantic field: compact-joined
/// lowerCamelCase ("clientOrderId") and separator-joined snake or kebab case
/// ("client_order_id", "client-order-id"). All three map to one key.
pub fn canonical_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let chars: Vec<char> = raw.trim().chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '_' || c == ' ' || c == '.' {
            if !out.ends_with('_') && !out.is_empty() {
                out.push('_');
            }
            continue;
        }
        if c.is_uppercase() {
            let prev = if i > 0 { Some(chars[i - 1]) } else { None };
            let next = chars.get(i + 1);
            // Word boundary: lower/digit before, or an acronym ending
            // ("APRValue" -> apr_value)
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if boundary && !out.ends_with('_') && !out.is_empty() {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out.trim_matches('_').to_string()
}

/// Convert a canonical snake/kebab-case key to the wire's lowerCamelCase.
///
/// Used for outgoing request parameters; the inverse direction of
/// [`canonical_key`] for registry fields.
pub fn wire_key(canonical: &str) -> String {
    if !canonical.contains('_') && !canonical.contains('-') {
        return canonical.to_string();
    }
    let mut parts = canonical.split(['_', '-']).filter(|p| !p.is_empty());
    let mut out = String::with_capacity(canonical.len());
    if let Some(first) = parts.next() {
        out.push_str(&first.to_lowercase());
    }
    for part in parts {
        let mut cs = part.chars();
        if let Some(head) = cs.next() {
            out.extend(head.to_uppercase());
            out.push_str(cs.as_str());
        }
    }
    out
}

/// Flatten a record into canonical keys, expanding nested sub-objects as
/// `parent_child` columns up to [`MAX_FLATTEN_DEPTH`].
///
/// Key order follows the source record; a collision after normalization is
/// resolved last-write-wins (value overwritten, first-seen position kept).
pub fn flatten_record(record: &Record, depth_limit: usize) -> Record {
    let mut flat = Record::new();
    flatten_into(&mut flat, None, record, depth_limit);
    flat
}

fn flatten_into(flat: &mut Record, prefix: Option<&str>, record: &Record, depth_left: usize) {
    for (raw_key, value) in record {
        let key = match prefix {
            Some(prefix) => format!("{prefix}_{}", canonical_key(raw_key)),
            None => canonical_key(raw_key),
        };
        match value {
            Value::Object(nested) if depth_left > 1 => {
                flatten_into(flat, Some(&key), nested, depth_left - 1);
            }
            other => {
                flat.insert(key, other.clone());
            }
        }
    }
}
