//! Nested data used to resolve tags by name path

use std::collections::BTreeMap;

/// A data value: plain text or a mapping of further values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Empty mapping
    pub fn map() -> Self {
        Value::Map(BTreeMap::new())
    }

    /// Builder-style insert; turns a text value into a mapping first
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        if let Value::Text(_) = self {
            *self = Value::map();
        }
        if let Value::Map(map) = self {
            map.insert(key.into(), value.into());
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Value::Text(_) => false,
            Value::Map(map) => map.is_empty(),
        }
    }

    /// Walk the mapping one segment at a time
    ///
    /// Fails (returns `None`) on a missing key or when an intermediate value
    /// is text rather than a mapping.
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Option<&Value> {
        let mut current = self;
        for segment in path {
            match current {
                Value::Map(map) => current = map.get(segment.as_ref())?,
                Value::Text(_) => return None,
            }
        }
        Some(current)
    }

    /// Text of this value, `None` for mappings
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text.as_str()),
            Value::Map(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

/// Scalars are stringified; arrays become mappings keyed by index
impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Value::Text(s),
            toml::Value::Integer(i) => Value::Text(i.to_string()),
            toml::Value::Float(f) => Value::Text(f.to_string()),
            toml::Value::Boolean(b) => Value::Text(b.to_string()),
            toml::Value::Datetime(d) => Value::Text(d.to_string()),
            toml::Value::Array(items) => Value::Map(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| (i.to_string(), Value::from(item)))
                    .collect(),
            ),
            toml::Value::Table(table) => Value::Map(
                table
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}
