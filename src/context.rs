use serde_json::{Map, Value};

/// Structured payload attached to a log entry.
///
/// Rendered as compact JSON after the message. An empty context renders as
/// nothing at all, so plain `logger.info("msg", Context::new())` lines carry
/// no trailing `{}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context(Map<String, Value>);

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Attach a key/value pair
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// True when no pairs are attached
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compact JSON text, or `None` when empty.
    pub fn render(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            // Map<String, Value> serialization cannot fail
            serde_json::to_string(&Value::Object(self.0.clone())).ok()
        }
    }
}

impl From<Map<String, Value>> for Context {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
