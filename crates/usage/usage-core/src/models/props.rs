//! Raw component props as handed over by the UI layer, and their sanitized form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{CIRCULAR_MARKER, FUNCTION_MARKER, NODE_MARKER};

/// Prop values that cannot be serialized and collapse to a fixed marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpaqueKind {
    /// A callback (`onClick`, render functions, ...).
    Function,
    /// A renderable UI node (icons, children elements, ...).
    Node,
    /// A reference back into an object already being visited.
    Circular,
}

impl OpaqueKind {
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Function => FUNCTION_MARKER,
            Self::Node => NODE_MARKER,
            Self::Circular => CIRCULAR_MARKER,
        }
    }
}

/// A single raw prop value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<PropValue>),
    Object(BTreeMap<String, PropValue>),
    Opaque(OpaqueKind),
}

impl PropValue {
    /// Anything but `Null` counts as provided.
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Null)
    }

    /// Truthiness as the UI layer understands it: empty strings, zero, NaN,
    /// `false` and null are falsy; containers and opaque values are truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Array(_) | Self::Object(_) | Self::Opaque(_) => true,
        }
    }

    /// Length of an array value, `None` for everything else.
    pub fn array_len(&self) -> Option<usize> {
        match self {
            Self::Array(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Render a scalar the way string interpolation would. Containers and
    /// opaque values are handled by the sanitizer, not here.
    pub fn scalar_string(&self) -> Option<String> {
        match self {
            Self::Null => Some("null".to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(format_number(*n)),
            Self::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Convert to JSON, replacing opaque values with their markers.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::String(s) => Value::String(s.clone()),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Self::Opaque(kind) => Value::String(kind.marker().to_string()),
        }
    }
}

/// Integral values print without a fractional part, everything else as-is.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for PropValue {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<i32> for PropValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<usize> for PropValue {
    fn from(v: usize) -> Self {
        Self::Number(v as f64)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<OpaqueKind> for PropValue {
    fn from(kind: OpaqueKind) -> Self {
        Self::Opaque(kind)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for PropValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n.as_f64().map(Self::Number).unwrap_or(Self::Null),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

/// A component's raw property bag. Keys are kept sorted, so insertion order
/// never leaks into anything derived from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(BTreeMap<String, PropValue>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    /// True if `key` is set to anything but null.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(PropValue::is_present)
    }

    /// True if any of `keys` is set to anything but null.
    pub fn has_any(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.has(k))
    }

    /// True if `key` is set to a truthy value.
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(PropValue::is_truthy)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropValue)> {
        self.0.iter()
    }

    /// Build props from a JSON object. Non-object values yield empty props.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => Self(
                map.into_iter()
                    .map(|(k, v)| (k, PropValue::from(v)))
                    .collect(),
            ),
            _ => Self::default(),
        }
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Sanitized, allow-listed, primitive-only props summary.
///
/// Serializes either as a flat `{key: "value"}` map or, when the detailed
/// map would exceed the size bound, as `{"oversized": true, "propCount": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SafeProps {
    Oversized {
        oversized: bool,
        #[serde(rename = "propCount")]
        prop_count: usize,
    },
    Detailed(BTreeMap<String, String>),
}

impl SafeProps {
    pub fn is_oversized(&self) -> bool {
        matches!(self, Self::Oversized { .. })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            Self::Detailed(map) => map.get(key).map(String::as_str),
            Self::Oversized { .. } => None,
        }
    }

    /// Canonical `(key, value)` pairs in key order.
    pub fn canonical_pairs(&self) -> Vec<(String, String)> {
        match self {
            Self::Detailed(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            Self::Oversized {
                oversized,
                prop_count,
            } => vec![
                ("oversized".to_string(), oversized.to_string()),
                ("propCount".to_string(), prop_count.to_string()),
            ],
        }
    }
}

impl Default for SafeProps {
    fn default() -> Self {
        Self::Detailed(BTreeMap::new())
    }
}
