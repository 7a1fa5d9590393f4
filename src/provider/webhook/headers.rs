//! Conversion between the declarative `header` set and the API header map.
//!
//! The declarative side is an unordered set of `{key, value}` objects; the
//! API side is a `HashMap<String, String>`. Neither side is ordered.
//! Duplicate keys in the set are not an error: they collapse to a single
//! entry holding the last value seen.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::provider::Diagnostic;

/// One custom header sent with each webhook notification.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeaderPair {
    /// Header name.
    pub key: String,
    /// Header value.
    pub value: String,
}

impl HeaderPair {
    /// Creates a header pair.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Collapses header pairs into a map; later pairs win on duplicate keys.
///
/// A configuration that repeats a key never matches the collapsed state read
/// back from the API, so every apply of it sends an update.
#[must_use]
pub fn to_map<I>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = HeaderPair>,
{
    pairs
        .into_iter()
        .map(|pair| (pair.key, pair.value))
        .collect()
}

/// Expands a header map into one pair per entry, in no particular order.
#[must_use]
pub fn from_map(headers: &HashMap<String, String>) -> Vec<HeaderPair> {
    headers
        .iter()
        .map(|(key, value)| HeaderPair::new(key.clone(), value.clone()))
        .collect()
}

/// Decodes the `header` attribute's elements.
pub(super) fn pairs_from_values(values: &[Value]) -> Result<Vec<HeaderPair>, Diagnostic> {
    values
        .iter()
        .map(|value| {
            HeaderPair::deserialize(value).map_err(|e| {
                Diagnostic::error("Invalid header")
                    .with_detail(e.to_string())
                    .with_attribute("header")
            })
        })
        .collect()
}

/// Encodes header pairs as the `header` attribute value.
pub(super) fn pairs_to_value(pairs: &[HeaderPair]) -> Value {
    Value::Array(
        pairs
            .iter()
            .map(|pair| serde_json::json!({"key": pair.key, "value": pair.value}))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_duplicate_keys_collapse_to_last_value() {
        let map = to_map(vec![
            HeaderPair::new("X-Key", "first"),
            HeaderPair::new("X-Other", "kept"),
            HeaderPair::new("X-Key", "second"),
        ]);

        assert_eq!(map.len(), 2);
        assert_eq!(map["X-Key"], "second");
        assert_eq!(map["X-Other"], "kept");
    }

    #[test]
    fn test_from_map_yields_one_pair_per_entry() {
        let headers = HashMap::from([
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ]);

        let pairs: HashSet<_> = from_map(&headers).into_iter().collect();
        assert_eq!(
            pairs,
            HashSet::from([HeaderPair::new("a", "1"), HeaderPair::new("b", "2")])
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(to_map(Vec::new()).is_empty());
        assert!(from_map(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_pairs_from_values_rejects_incomplete_pairs() {
        let err = pairs_from_values(&[json!({"key": "X-Only-Key"})]).unwrap_err();
        assert_eq!(err.attribute.as_deref(), Some("header"));

        let ok = pairs_from_values(&[json!({"key": "k", "value": "v"})]).unwrap();
        assert_eq!(ok, vec![HeaderPair::new("k", "v")]);
    }

    #[test]
    fn test_pairs_to_value_shape() {
        let value = pairs_to_value(&[HeaderPair::new("k", "v")]);
        assert_eq!(value, json!([{"key": "k", "value": "v"}]));
    }

    proptest! {
        #[test]
        fn prop_set_to_map_to_set_keeps_last_assigned_values(
            pairs in prop::collection::vec(("[a-d]{1,2}", "[a-z0-9]{0,4}"), 0..12)
        ) {
            let pairs: Vec<HeaderPair> = pairs
                .into_iter()
                .map(|(k, v)| HeaderPair::new(k, v))
                .collect();

            let mut expected = HashMap::new();
            for pair in &pairs {
                expected.insert(pair.key.clone(), pair.value.clone());
            }

            let map = to_map(pairs);
            prop_assert_eq!(&map, &expected);

            let back = from_map(&map);
            prop_assert_eq!(back.len(), expected.len());
            prop_assert_eq!(to_map(back), expected);
        }
    }
}
