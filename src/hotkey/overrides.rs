//! User overrides mapping alternate combos to canonical ones
//!
//! Stored as an ordered association list: hint lookup scans it in
//! insertion order and the first match wins.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered mapping from alternate combo to canonical combo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    entries: Vec<(String, String)>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `alternate` to `canonical`.
    ///
    /// An existing alternate keeps its position and takes the new value.
    pub fn insert(&mut self, alternate: impl Into<String>, canonical: impl Into<String>) {
        let alternate = alternate.into();
        let canonical = canonical.into();
        match self.entries.iter_mut().find(|(alt, _)| *alt == alternate) {
            Some(entry) => entry.1 = canonical,
            None => self.entries.push((alternate, canonical)),
        }
    }

    /// Canonical combo configured for `alternate`
    pub fn get(&self, alternate: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(alt, _)| alt == alternate)
            .map(|(_, canonical)| canonical.as_str())
    }

    /// First alternate whose canonical combo is `combo`
    pub fn alternate_for(&self, combo: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, canonical)| canonical == combo)
            .map(|(alt, _)| alt.as_str())
    }

    /// The combo to display for `combo`: its first alternate, or itself
    pub fn resolve<'a>(&'a self, combo: &'a str) -> &'a str {
        self.alternate_for(combo).unwrap_or(combo)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A, C> FromIterator<(A, C)> for Overrides
where
    A: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, C)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (alternate, canonical) in iter {
            overrides.insert(alternate, canonical);
        }
        overrides
    }
}

impl Serialize for Overrides {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (alternate, canonical) in &self.entries {
            map.serialize_entry(alternate, canonical)?;
        }
        map.end()
    }
}

struct OverridesVisitor;

impl<'de> Visitor<'de> for OverridesVisitor {
    type Value = Overrides;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of alternate combo to canonical combo")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut overrides = Overrides::new();
        while let Some((alternate, canonical)) = access.next_entry::<String, String>()? {
            overrides.insert(alternate, canonical);
        }
        Ok(overrides)
    }
}

impl<'de> Deserialize<'de> for Overrides {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OverridesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let overrides: Overrides = [("alt+b", "ctrl+b"), ("alt+c", "ctrl+b")]
            .into_iter()
            .collect();
        assert_eq!(overrides.alternate_for("ctrl+b"), Some("alt+b"));
        assert_eq!(overrides.resolve("ctrl+b"), "alt+b");
    }

    #[test]
    fn test_resolve_without_match() {
        let overrides: Overrides = [("alt+b", "ctrl+b")].into_iter().collect();
        assert_eq!(overrides.resolve("ctrl+s"), "ctrl+s");
        // Lookup is by canonical value, never by alternate key
        assert_eq!(overrides.resolve("alt+b"), "alt+b");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut overrides = Overrides::new();
        overrides.insert("alt+b", "ctrl+b");
        overrides.insert("alt+c", "ctrl+c");
        overrides.insert("alt+b", "ctrl+x");

        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.get("alt+b"), Some("ctrl+x"));
        let keys: Vec<_> = overrides.iter().map(|(a, _)| a).collect();
        assert_eq!(keys, ["alt+b", "alt+c"]);
    }

    #[test]
    fn test_deserialize_preserves_document_order() {
        let json = r#"{"z": "ctrl+s", "1": "ctrl+s", "a": "ctrl+s"}"#;
        let overrides: Overrides = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = overrides.iter().map(|(a, _)| a).collect();
        assert_eq!(keys, ["z", "1", "a"]);
        assert_eq!(overrides.resolve("ctrl+s"), "z");
    }

    #[test]
    fn test_deserialize_rejects_non_map() {
        assert!(serde_json::from_str::<Overrides>(r#"["ctrl+s"]"#).is_err());
    }

    #[test]
    fn test_serialize_as_object() {
        let overrides: Overrides = [("b", "ctrl+b"), ("a", "ctrl+a")].into_iter().collect();
        let json = serde_json::to_string(&overrides).unwrap();
        assert_eq!(json, r#"{"b":"ctrl+b","a":"ctrl+a"}"#);
    }
}
