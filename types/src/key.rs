//! Composite keys addressing records inside a map.
//!
//! A key is an ordered list of named scalar fields. Two keys address the same
//! slot iff their canonical forms match. The canonical form is the compact JSON
//! object with fields in insertion order, e.g. `{"worker-id":"w1","skill-id":"s1"}`.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A scalar field value inside a composite key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyValue {
    Number(i64),
    Text(String),
}

impl KeyValue {
    fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Number(n) => serde_json::Value::from(*n),
            Self::Text(s) => serde_json::Value::from(s.as_str()),
        }
    }
}

impl From<&str> for KeyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for KeyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for KeyValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<i64> for KeyValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// An ordered set of named fields used to address a record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompositeKey {
    fields: Vec<(String, KeyValue)>,
}

impl CompositeKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Field order is significant.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<KeyValue>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// The canonical serialization used as the storage slot identifier.
    pub fn canonical(&self) -> String {
        let mut out = String::from("{");
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&serde_json::Value::from(name.as_str()).to_string());
            out.push(':');
            out.push_str(&value.to_json().to_string());
        }
        out.push('}');
        out
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl Serialize for CompositeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// Visits entries in document order so that field order survives deserialization.
struct CompositeKeyVisitor;

impl<'de> Visitor<'de> for CompositeKeyVisitor {
    type Value = CompositeKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of string or integer fields")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, value)) = access.next_entry::<String, KeyValue>()? {
            fields.push((name, value));
        }
        Ok(CompositeKey { fields })
    }
}

impl<'de> Deserialize<'de> for CompositeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CompositeKeyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form_keeps_insertion_order() {
        let key = CompositeKey::new()
            .field("worker-id", "worker123")
            .field("skill-id", "skill123");
        assert_eq!(
            key.canonical(),
            r#"{"worker-id":"worker123","skill-id":"skill123"}"#
        );
        assert_eq!(serde_json::to_string(&key).unwrap(), key.canonical());
    }

    #[test]
    fn field_order_changes_the_slot() {
        let a = CompositeKey::new().field("a", "1").field("b", "2");
        let b = CompositeKey::new().field("b", "2").field("a", "1");
        assert_ne!(a.canonical(), b.canonical());
        assert_ne!(a, b);
    }

    #[test]
    fn numbers_and_strings_are_distinct() {
        let n = CompositeKey::new().field("id", 1i64);
        let s = CompositeKey::new().field("id", "1");
        assert_eq!(n.canonical(), r#"{"id":1}"#);
        assert_ne!(n.canonical(), s.canonical());
    }

    #[test]
    fn escapes_special_characters() {
        let key = CompositeKey::new().field("name", "a\"b");
        assert_eq!(key.canonical(), r#"{"name":"a\"b"}"#);
    }

    #[test]
    fn deserialize_preserves_document_order() {
        let key: CompositeKey =
            serde_json::from_str(r#"{"worker-id":"w1","skill-id":"s1"}"#).unwrap();
        let expected = CompositeKey::new().field("worker-id", "w1").field("skill-id", "s1");
        assert_eq!(key, expected);
    }
}
