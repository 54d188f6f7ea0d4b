//! Generic scoped accumulator backing every builder scope.
//!
//! # Responsibilities
//! - Store key/value pairs under camelCase keys, preserving insertion order
//! - Lazily create ordered sequences for appended values
//! - Prune null-valued entries on finalization
//!
//! # Design Decisions
//! - Each builder scope owns the `Document` for the fragment it may mutate;
//!   closing a scope moves the fragment into its parent. No scope can alias
//!   another scope's storage.

use serde_json::{Map, Value};

/// Convert a PascalCase name to the camelCase form used by `pass.json` keys.
///
/// The leading run of uppercase characters is lowercased, stopping before an
/// uppercase that begins a new word: `WebServiceURL` -> `webServiceURL`,
/// `NFCKeys` -> `nfcKeys`, `FormatVersion` -> `formatVersion`.
pub(crate) fn to_camel_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if !c.is_ascii_uppercase() {
            break;
        }
        // An uppercase followed by a lowercase starts a new word (unless it
        // is the very first character).
        if i > 0 && i + 1 < chars.len() && chars[i + 1].is_ascii_lowercase() {
            break;
        }
        out.push(c.to_ascii_lowercase());
        i += 1;
    }

    out.extend(&chars[i..]);
    out
}

/// Ordered JSON object under construction.
#[derive(Debug, Clone, Default)]
pub struct Document {
    values: Map<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Store `value` under the camelCase form of `name`, overwriting any
    /// prior value for that key.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.values.insert(to_camel_case(name), value.into());
    }

    /// Append `value` to the ordered sequence under the camelCase form of
    /// `name`, creating the sequence on first use.
    pub fn append(&mut self, name: &str, value: impl Into<Value>) {
        let slot = self
            .values
            .entry(to_camel_case(name))
            .or_insert_with(|| Value::Array(Vec::new()));
        match slot {
            Value::Array(items) => items.push(value.into()),
            other => *other = Value::Array(vec![value.into()]),
        }
    }

    /// Finalize into a JSON object, dropping null-valued map entries at
    /// every nesting level.
    pub fn into_value(self) -> Value {
        prune(Value::Object(self.values))
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Value {
        Value::Object(doc.values)
    }
}

fn prune(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, prune(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(prune).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case_single_word() {
        assert_eq!(to_camel_case("Description"), "description");
        assert_eq!(to_camel_case("FormatVersion"), "formatVersion");
        assert_eq!(to_camel_case("MaxDistance"), "maxDistance");
    }

    #[test]
    fn test_camel_case_trailing_acronym() {
        assert_eq!(to_camel_case("WebServiceURL"), "webServiceURL");
        assert_eq!(to_camel_case("AppLaunchURL"), "appLaunchURL");
        assert_eq!(to_camel_case("URL"), "url");
    }

    #[test]
    fn test_camel_case_leading_acronym() {
        assert_eq!(to_camel_case("NFCKeys"), "nfcKeys");
    }

    #[test]
    fn test_camel_case_passthrough() {
        assert_eq!(to_camel_case("description"), "description");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_set_overwrites() {
        let mut doc = Document::new();
        doc.set("LogoText", "first");
        doc.set("LogoText", "second");
        assert_eq!(doc.into_value(), json!({ "logoText": "second" }));
    }

    #[test]
    fn test_append_creates_sequence_and_preserves_order() {
        let mut doc = Document::new();
        doc.append("SerialNumbers", "a");
        doc.append("SerialNumbers", "b");
        doc.append("SerialNumbers", "c");
        assert_eq!(doc.into_value(), json!({ "serialNumbers": ["a", "b", "c"] }));
    }

    #[test]
    fn test_nulls_pruned_recursively() {
        let mut inner = Document::new();
        inner.set("Kept", 1);
        inner.set("Dropped", Value::Null);

        let mut doc = Document::new();
        doc.set("Top", Value::Null);
        doc.set("Nested", inner);
        doc.append("Items", json!({ "kept": true, "dropped": null }));

        assert_eq!(
            doc.into_value(),
            json!({ "nested": { "kept": 1 }, "items": [{ "kept": true }] })
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut doc = Document::new();
        doc.set("Zulu", 1);
        doc.set("Alpha", 2);
        doc.set("Mike", 3);
        let rendered = serde_json::to_string(&doc.into_value()).unwrap();
        assert_eq!(rendered, r#"{"zulu":1,"alpha":2,"mike":3}"#);
    }
}
