use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A value handed to an assertion.
///
/// `Null`, `Bool`, `Number` and `String` compare by value. `Date`, `Array`,
/// `Object` and `Function` are references: cloning shares the reference,
/// building a new one yields a distinct identity.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(Arc<DateTime<Utc>>),
    Array(Arc<Vec<Value>>),
    Object(Arc<BTreeMap<String, Value>>),
    /// Opaque callable; only its name is kept
    Function(Arc<str>),
}

impl Value {
    /// Build an object from key/value pairs
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(Arc::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// Build an array from anything convertible
    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::Array(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    pub fn date(at: DateTime<Utc>) -> Self {
        Value::Date(Arc::new(at))
    }

    pub fn function(name: impl AsRef<str>) -> Self {
        Value::Function(Arc::from(name.as_ref()))
    }

    /// Type name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }
}

/// Finite numbers always print positionally, never in exponent form.
fn format_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}", if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // -0 prints as 0
        write!(f, "0")
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => format_number(*n, f),
            Value::String(s) => write!(f, "{}", s),
            Value::Date(d) => write!(f, "{}", d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    // null elements render empty when joined
                    if !matches!(item, Value::Null) {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Function(name) => write!(f, "function {}", name),
        }
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(at: DateTime<Utc>) -> Self {
        Value::date(at)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::array(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::array(items),
            serde_json::Value::Object(map) => Value::object(map),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_display_numbers() {
        assert_eq!(Value::from(4).to_string(), "4");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from(-0.0).to_string(), "0");
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_display_extreme_numbers_are_positional() {
        assert_eq!(Value::from(1e21).to_string(), "1000000000000000000000");
        assert_eq!(Value::from(1e-7).to_string(), "0.0000001");
        assert_eq!(Value::from(-1.5e3).to_string(), "-1500");
        assert_eq!(Value::from(u64::MAX).to_string(), "18446744073709552000");
    }

    #[test]
    fn test_display_compound() {
        assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "1,2,3");
        assert_eq!(
            Value::array([Value::from(1), Value::Null, Value::from("a")]).to_string(),
            "1,,a"
        );
        assert_eq!(Value::object([("x", 1)]).to_string(), "[object Object]");
        assert_eq!(Value::function("handler").to_string(), "function handler");
        assert_eq!(Value::from(None::<i32>).to_string(), "null");
    }

    #[test]
    fn test_display_date() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(Value::from(at).to_string(), "2024-03-01T12:30:00.000Z");
    }

    #[test]
    fn test_from_json() {
        let value = Value::from(json!({"name": "mc", "tags": ["a", "b"], "n": 3}));
        match value {
            Value::Object(map) => {
                assert_eq!(map.len(), 3);
                assert_eq!(map["tags"].to_string(), "a,b");
                assert!(matches!(map["n"], Value::Number(n) if n == 3.0));
            }
            other => panic!("Expected object, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_is_primitive() {
        assert!(Value::from("x").is_primitive());
        assert!(Value::Null.is_primitive());
        assert!(!Value::from(vec![1]).is_primitive());
        assert!(!Value::object([("a", true)]).is_primitive());
    }
}
