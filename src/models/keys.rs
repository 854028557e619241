//! Map keys written as YAML scalars
//!
//! Shade and step names are usually written bare (`50:`, `0:`), which YAML
//! reads as integers. Maps keyed by name accept both forms and keep file
//! order.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// A map key as written: `md`, `"50"` or `50`
#[derive(Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged, expecting = "a string or integer key")]
enum ScalarKey {
    Text(String),
    Integer(i64),
}

impl From<ScalarKey> for String {
    fn from(key: ScalarKey) -> Self {
        match key {
            ScalarKey::Text(text) => text,
            ScalarKey::Integer(n) => n.to_string(),
        }
    }
}

/// Deserialize an ordered map whose keys may be strings or integers
pub fn scalar_keyed<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    let raw = IndexMap::<ScalarKey, V>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(key, value)| (key.into(), value)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Steps {
        #[serde(deserialize_with = "scalar_keyed")]
        steps: IndexMap<String, u32>,
    }

    #[test]
    fn test_preserves_file_order() {
        let parsed: Steps =
            serde_yaml::from_str("steps:\n  md: 3\n  \"10\": 1\n  xs: 2\n  \"2\": 4\n").unwrap();
        let keys: Vec<_> = parsed.steps.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["md", "10", "xs", "2"]);
        assert_eq!(parsed.steps.get("xs"), Some(&2));
    }

    #[test]
    fn test_bare_integer_keys() {
        let parsed: Steps = serde_yaml::from_str("steps:\n  0: 0\n  1: 2\n  xs: 5\n").unwrap();
        let keys: Vec<_> = parsed.steps.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["0", "1", "xs"]);
        assert_eq!(parsed.steps.get("1"), Some(&2));
    }

    #[test]
    fn test_quoted_and_bare_key_collide() {
        let parsed: Steps = serde_yaml::from_str("steps:\n  \"5\": 1\n  5: 9\n").unwrap();
        assert_eq!(parsed.steps.len(), 1);
        assert_eq!(parsed.steps.get("5"), Some(&9));
    }

    #[test]
    fn test_rejects_sequence() {
        let result: Result<Steps, _> = serde_yaml::from_str("steps:\n  - 1\n  - 2\n");
        assert!(result.is_err());
    }
}
