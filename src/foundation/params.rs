use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::foundation::error::{FlexError, FlexResult};

/// Named construction parameters for a single node call.
///
/// Values are numbers, booleans, or (for targets and color literals) strings. Typed
/// parameter structs are decoded from the set with [`ParameterSet::decode`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(Map<String, Value>);

impl ParameterSet {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw parameter value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Numeric parameter value, if present and numeric.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Whether the parameter is present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode into a typed parameter struct; missing keys take the struct's defaults.
    pub fn decode<T: DeserializeOwned>(&self) -> FlexResult<T> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| FlexError::validation(format!("invalid parameters: {e}")))
    }

    /// Accept `null` (empty) or an object.
    pub fn from_value(value: &Value) -> FlexResult<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Ok(Self(map.clone())),
            other => Err(FlexError::shape(format!(
                "parameters must be an object, got {other}"
            ))),
        }
    }
}

impl FromIterator<(String, Value)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/params.rs"]
mod tests;
