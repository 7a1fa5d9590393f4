//! Per-call view of a resource's prior state and planned configuration.

use serde_json::{Map, Value};

/// The data a lifecycle callback reads from and writes to.
///
/// `ResourceData` holds two JSON objects: the state recorded after the last
/// successful operation (`prior`) and the current values (`current`), which
/// start as the planned configuration and receive every [`set`](Self::set).
/// The resource identity is tracked separately; an empty ID means the
/// resource does not exist (not yet created, deleted, or gone remotely).
///
/// # Example
///
/// ```rust
/// use bigcommerce_provider::provider::ResourceData;
/// use serde_json::json;
///
/// let prior = json!({"id": "7", "is_active": true}).as_object().unwrap().clone();
/// let planned = json!({"is_active": false}).as_object().unwrap().clone();
///
/// let data = ResourceData::for_update(prior, planned);
/// assert_eq!(data.id(), "7");
/// assert!(data.has_change("is_active"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceData {
    id: String,
    prior: Map<String, Value>,
    current: Map<String, Value>,
}

impl ResourceData {
    /// Creates data for a resource about to be created from `config`.
    #[must_use]
    pub fn new(config: Map<String, Value>) -> Self {
        Self {
            id: String::new(),
            prior: Map::new(),
            current: config,
        }
    }

    /// Creates data from recorded state, for reads and deletes.
    #[must_use]
    pub fn from_state(state: Map<String, Value>) -> Self {
        Self {
            id: id_of(&state),
            current: state.clone(),
            prior: state,
        }
    }

    /// Creates data for an update from recorded state and the new configuration.
    #[must_use]
    pub fn for_update(prior: Map<String, Value>, config: Map<String, Value>) -> Self {
        Self {
            id: id_of(&prior),
            prior,
            current: config,
        }
    }

    /// Returns the resource identity; empty when the resource does not exist.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sets the resource identity. An empty ID marks the resource as gone.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Returns the current value of `key`, treating `null` as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.current.get(key).filter(|v| !v.is_null())
    }

    /// Returns the current value of `key` if it is a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns the current value of `key` if it is a boolean.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Returns the elements of a set attribute; absent sets are empty.
    #[must_use]
    pub fn get_set(&self, key: &str) -> &[Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Returns the `(prior, current)` values of `key`.
    #[must_use]
    pub fn get_change(&self, key: &str) -> (Option<&Value>, Option<&Value>) {
        (self.prior.get(key).filter(|v| !v.is_null()), self.get(key))
    }

    /// Returns `true` if `key` differs between prior state and current values.
    ///
    /// Arrays compare as unordered sets. Absent, `null` and an empty array are
    /// equivalent.
    #[must_use]
    pub fn has_change(&self, key: &str) -> bool {
        let (old, new) = self.get_change(key);
        canonical(old) != canonical(new)
    }

    /// Sets the current value of `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.current.insert(key.into(), value.into());
    }

    /// Returns the state to record, or `None` if the resource is gone.
    ///
    /// The returned object carries the identity under `id`.
    #[must_use]
    pub fn state(&self) -> Option<Map<String, Value>> {
        if self.id.is_empty() {
            return None;
        }
        let mut state = self.current.clone();
        state.insert("id".to_string(), Value::String(self.id.clone()));
        Some(state)
    }
}

fn id_of(state: &Map<String, Value>) -> String {
    state
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Normalizes a value for order-insensitive comparison.
fn canonical(value: Option<&Value>) -> Option<Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) if items.is_empty() => None,
        Some(other) => Some(sort_arrays(other)),
    }
}

fn sort_arrays(value: &Value) -> Value {
    match value {
        Value::Array(items) => {
            let mut items: Vec<Value> = items.iter().map(sort_arrays).collect();
            items.sort_by_cached_key(Value::to_string);
            Value::Array(items)
        }
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), sort_arrays(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}
