//! YARRRML document access
//!
//! A mapping document arrives already parsed into a generic JSON value (the
//! CLI transcodes YAML at the boundary). This module provides the
//! canonical-key resolver over that value: YARRRML allows each section key to
//! be spelled in full or abbreviated form, and every component resolves keys
//! through the single synonym table below instead of re-scanning aliases
//! ad hoc.

use serde_json::Value as JsonValue;

/// Canonical YARRRML section keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalKey {
    /// The `mappings` section holding the document's rules
    Mappings,
    /// A rule's predicate-object list
    PredicateObjects,
    /// The predicate side of an expanded predicate-object entry
    Predicates,
    /// The object side of an expanded predicate-object entry
    Objects,
    /// The value of an expanded object entry
    Value,
    /// The document's data sources
    Sources,
    /// A rule's subject template
    Subjects,
}

impl CanonicalKey {
    /// Accepted spellings for this key, most explicit first
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            CanonicalKey::Mappings => &["mappings", "mapping"],
            CanonicalKey::PredicateObjects => &["predicateobjects", "predicateobject", "po"],
            CanonicalKey::Predicates => &["predicates", "predicate", "p"],
            CanonicalKey::Objects => &["objects", "object", "o"],
            CanonicalKey::Value => &["value", "v"],
            CanonicalKey::Sources => &["sources", "source"],
            CanonicalKey::Subjects => &["subjects", "subject", "s"],
        }
    }
}

/// Resolve a canonical key against a document node
///
/// Returns the first present synonym's value. Absence is a normal case, not a
/// fault; non-object nodes resolve to `None` for every key.
pub fn resolve(node: &JsonValue, key: CanonicalKey) -> Option<&JsonValue> {
    let map = node.as_object()?;
    key.synonyms().iter().find_map(|name| map.get(*name))
}

/// An already-parsed YARRRML mapping document
///
/// Read-only wrapper over the generic document value. Construction never
/// validates; malformed rules are rejected when a descriptor is built.
#[derive(Debug, Clone)]
pub struct MappingDocument {
    root: JsonValue,
}

impl MappingDocument {
    /// Wrap a parsed document value
    pub fn new(root: JsonValue) -> Self {
        Self { root }
    }

    /// The raw document value
    pub fn root(&self) -> &JsonValue {
        &self.root
    }

    /// Resolve a canonical key at the document's top level
    pub fn resolve(&self, key: CanonicalKey) -> Option<&JsonValue> {
        resolve(&self.root, key)
    }

    /// Iterate the document's mapping rules in document order
    ///
    /// Empty when the mappings section is absent or not an object.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &JsonValue)> + '_ {
        self.resolve(CanonicalKey::Mappings)
            .and_then(JsonValue::as_object)
            .into_iter()
            .flat_map(|map| map.iter().map(|(name, rule)| (name.as_str(), rule)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_full_spelling() {
        let node = json!({ "predicateobjects": [["a", "http://ex.org/Person"]] });
        let value = resolve(&node, CanonicalKey::PredicateObjects).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_resolve_abbreviated_spelling() {
        let node = json!({ "po": [["a", "http://ex.org/Person"]] });
        assert!(resolve(&node, CanonicalKey::PredicateObjects).is_some());

        let rule = json!({ "s": "http://ex.org/person/$(id)" });
        let subject = resolve(&rule, CanonicalKey::Subjects).unwrap();
        assert_eq!(subject.as_str(), Some("http://ex.org/person/$(id)"));
    }

    #[test]
    fn test_resolve_prefers_most_explicit_spelling() {
        let node = json!({ "po": "short", "predicateobjects": "long" });
        let value = resolve(&node, CanonicalKey::PredicateObjects).unwrap();
        assert_eq!(value.as_str(), Some("long"));
    }

    #[test]
    fn test_resolve_absence_is_none() {
        let node = json!({ "unrelated": 1 });
        assert!(resolve(&node, CanonicalKey::Mappings).is_none());
        assert!(resolve(&json!("scalar"), CanonicalKey::Mappings).is_none());
        assert!(resolve(&json!(null), CanonicalKey::Sources).is_none());
    }

    #[test]
    fn test_rules_iterates_in_document_order() {
        let doc = MappingDocument::new(json!({
            "mappings": {
                "person": { "subject": "http://ex.org/person/$(id)" },
                "address": { "subject": "http://ex.org/address/$(id)" }
            }
        }));
        let names: Vec<&str> = doc.rules().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["person", "address"]);
    }

    #[test]
    fn test_rules_empty_without_mappings_section() {
        let doc = MappingDocument::new(json!({ "sources": {} }));
        assert_eq!(doc.rules().count(), 0);
    }

    #[test]
    fn test_rules_accepts_mapping_synonym() {
        let doc = MappingDocument::new(json!({
            "mapping": { "person": { "subject": "http://ex.org/person/$(id)" } }
        }));
        assert_eq!(doc.rules().count(), 1);
    }
}
