use crate::assertion::types::AssertError;
use crate::assertion::value::Value;
use std::sync::Arc;

/// Identity / primitive equality.
///
/// Primitives compare by value (NaN is never identical to itself); reference
/// values are identical only when they share the same allocation.
pub fn identical(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Date(x), Value::Date(y)) => Arc::ptr_eq(x, y),
        (Value::Array(x), Value::Array(y)) => Arc::ptr_eq(x, y),
        (Value::Object(x), Value::Object(y)) => Arc::ptr_eq(x, y),
        (Value::Function(x), Value::Function(y)) => Arc::ptr_eq(x, y),
        _ => false,
    }
}

/// Structural equality.
///
/// Both values are checked for opaque content first, so a function anywhere
/// in either tree is an error even if the trees differ elsewhere. Object key
/// order is irrelevant, arrays are order-sensitive, types must match, NaN
/// equals NaN and dates compare by instant.
pub fn deep_equal(a: &Value, b: &Value) -> Result<bool, AssertError> {
    ensure_comparable(a, "$")?;
    ensure_comparable(b, "$")?;
    Ok(structural_eq(a, b))
}

fn ensure_comparable(value: &Value, path: &str) -> Result<(), AssertError> {
    match value {
        Value::Function(_) => Err(AssertError::Unserializable {
            path: path.to_string(),
            kind: value.type_name(),
        }),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| ensure_comparable(item, &format!("{}[{}]", path, i))),
        Value::Object(map) => map
            .iter()
            .try_for_each(|(key, item)| ensure_comparable(item, &format!("{}.{}", path, key))),
        _ => Ok(()),
    }
}

fn structural_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::Date(x), Value::Date(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            Arc::ptr_eq(x, y)
                || (x.len() == y.len() && x.iter().zip(y.iter()).all(|(l, r)| structural_eq(l, r)))
        }
        (Value::Object(x), Value::Object(y)) => {
            Arc::ptr_eq(x, y)
                || (x.len() == y.len()
                    && x.iter().all(|(key, l)| {
                        y.get(key).map(|r| structural_eq(l, r)).unwrap_or(false)
                    }))
        }
        _ => identical(a, b),
    }
}
