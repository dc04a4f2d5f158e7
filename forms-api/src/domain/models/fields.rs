use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Loosely typed form fields as posted by the form host.
///
/// Values are not guaranteed to be strings, or to be present at all.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(HashMap<String, Value>);

impl FieldMap {
    /// Returns the field as text, treating missing, `null` and empty values
    /// as absent. Numbers and booleans are stringified.
    pub fn text(&self, key: &str) -> Option<String> {
        let value = match self.0.get(key)? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => return None,
        };

        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Like [`FieldMap::text`] but substitutes `default` for absent values.
    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or_else(|| default.to_string())
    }

    /// HTML checkboxes post the literal `"on"` when ticked and nothing
    /// otherwise.
    pub fn is_checked(&self, key: &str) -> bool {
        self.0.get(key).and_then(Value::as_str) == Some("on")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
