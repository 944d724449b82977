//! Descriptor builder
//!
//! Walks a mapping document's rules and produces the cross-linked
//! [`MappingDescriptor`]. This is the only fallible stage of an analysis:
//! a rule without a subject or without a predicate-object list aborts the
//! build instead of yielding a partial descriptor.

use serde_json::Value as JsonValue;
use tracing::warn;

use crate::document::{resolve, CanonicalKey, MappingDocument};
use crate::error::{MappingError, MappingResult};
use crate::template::GeneralizedTemplate;

use super::{
    ClassEntry, MappingDescriptor, PredicateObjectEntry, PropertyEntry, TemplateEntry,
    TemplatePosition,
};

/// Builds a [`MappingDescriptor`] from a mapping document
pub struct DescriptorBuilder<'a> {
    doc: &'a MappingDocument,
}

impl<'a> DescriptorBuilder<'a> {
    /// Create a builder for the given document
    pub fn new(doc: &'a MappingDocument) -> Self {
        Self { doc }
    }

    /// Build the descriptor
    pub fn build(&self) -> MappingResult<MappingDescriptor> {
        let mut descriptor = MappingDescriptor::default();

        let (dataset, multiple_sources) = self.resolve_dataset();
        descriptor.set_dataset(dataset, multiple_sources);

        for (name, rule) in self.doc.rules() {
            self.extract_rule(name, rule, &mut descriptor)?;
        }

        Ok(descriptor)
    }

    /// Record one rule's classes, properties, and generalized template
    fn extract_rule(
        &self,
        name: &str,
        rule: &JsonValue,
        out: &mut MappingDescriptor,
    ) -> MappingResult<()> {
        let subject = extract_subject(name, rule)?;
        let entries = extract_predicate_objects(name, rule)?;
        let generalized = GeneralizedTemplate::generalize(&subject);

        let mut classes: Vec<String> = Vec::new();
        let mut properties: Vec<(String, String)> = Vec::new();
        for entry in entries {
            if entry.is_class_assertion() {
                classes.push(entry.object);
            } else {
                properties.push((entry.predicate, entry.object));
            }
        }
        let property_iris: Vec<String> = properties.iter().map(|(iri, _)| iri.clone()).collect();

        for iri in &classes {
            out.insert_class(ClassEntry {
                iri: iri.clone(),
                properties: property_iris.clone(),
                template: generalized.shape.clone(),
            });
        }

        for (iri, reference) in &properties {
            out.insert_property(PropertyEntry {
                iri: iri.clone(),
                classes: classes.clone(),
                template: generalized.shape.clone(),
                references: generalized.references.clone(),
                reference: reference.clone(),
            });
        }

        out.insert_template(TemplateEntry {
            shape: generalized.shape.clone(),
            classes,
            properties: property_iris,
            position: TemplatePosition::Subject,
            references: generalized.references,
        });

        Ok(())
    }

    /// Identifier of the first declared source, plus a multiplicity flag
    fn resolve_dataset(&self) -> (Option<String>, bool) {
        let Some(sources) = self.doc.resolve(CanonicalKey::Sources) else {
            return (None, false);
        };

        let declared: Vec<&JsonValue> = match sources {
            JsonValue::Object(map) => map.values().collect(),
            JsonValue::Array(items) => items.iter().collect(),
            other => vec![other],
        };

        if declared.len() > 1 {
            warn!(
                declared = declared.len(),
                "document declares multiple data sources; only the first is used"
            );
        }

        let first = declared.first().and_then(|source| source_identifier(source));
        (first, declared.len() > 1)
    }
}

/// A rule's subject template: a scalar, or the first scalar of a list
fn extract_subject(rule_name: &str, rule: &JsonValue) -> MappingResult<String> {
    let missing = || MappingError::MissingSubject {
        rule: rule_name.to_string(),
    };
    let subject = resolve(rule, CanonicalKey::Subjects).ok_or_else(missing)?;
    match subject {
        JsonValue::String(s) => Ok(s.clone()),
        JsonValue::Array(items) => items
            .first()
            .and_then(JsonValue::as_str)
            .map(str::to_string)
            .ok_or_else(missing),
        _ => Err(missing()),
    }
}

/// A rule's predicate-object entries, in document order
fn extract_predicate_objects(
    rule_name: &str,
    rule: &JsonValue,
) -> MappingResult<Vec<PredicateObjectEntry>> {
    let section = resolve(rule, CanonicalKey::PredicateObjects).ok_or_else(|| {
        MappingError::MissingPredicateObjects {
            rule: rule_name.to_string(),
        }
    })?;
    let list = section
        .as_array()
        .ok_or_else(|| MappingError::InvalidPredicateObject {
            rule: rule_name.to_string(),
            message: "expected a list of predicate-object entries".to_string(),
        })?;

    list.iter().map(|po| extract_entry(rule_name, po)).collect()
}

/// One predicate-object entry, in shorthand `[predicate, object]` or
/// expanded `{predicates: ..., objects: ...}` form
fn extract_entry(rule_name: &str, po: &JsonValue) -> MappingResult<PredicateObjectEntry> {
    let invalid = |message: &str| MappingError::InvalidPredicateObject {
        rule: rule_name.to_string(),
        message: message.to_string(),
    };

    match po {
        JsonValue::Array(pair) => {
            let predicate = pair
                .first()
                .and_then(JsonValue::as_str)
                .ok_or_else(|| invalid("shorthand entry has no predicate"))?;
            let object = pair
                .get(1)
                .and_then(JsonValue::as_str)
                .ok_or_else(|| invalid("shorthand entry has no object"))?;
            Ok(PredicateObjectEntry::new(predicate, object))
        }
        JsonValue::Object(_) => {
            let predicate = resolve(po, CanonicalKey::Predicates)
                .and_then(scalar_or_first)
                .ok_or_else(|| invalid("expanded entry has no predicates"))?
                .to_string();
            let object = resolve(po, CanonicalKey::Objects)
                .and_then(object_reference)
                .ok_or_else(|| invalid("expanded entry has no objects"))?;
            Ok(PredicateObjectEntry::new(predicate, object))
        }
        _ => Err(invalid("entry is neither a pair nor a mapping")),
    }
}

/// A scalar value, or the first scalar of a list
fn scalar_or_first(value: &JsonValue) -> Option<&str> {
    match value {
        JsonValue::String(s) => Some(s),
        JsonValue::Array(items) => items.first().and_then(JsonValue::as_str),
        _ => None,
    }
}

/// An object reference: a scalar, the first entry of a list, or the
/// resolved `value` key of an expanded object entry
fn object_reference(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Array(items) => items.first().and_then(object_reference),
        JsonValue::Object(_) => resolve(value, CanonicalKey::Value)
            .and_then(scalar_or_first)
            .map(str::to_string),
        _ => None,
    }
}

/// A source identifier: a scalar, the first entry of a list, or the
/// `access` key of an expanded source
fn source_identifier(source: &JsonValue) -> Option<String> {
    match source {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Array(items) => items.first().and_then(source_identifier),
        JsonValue::Object(map) => map
            .get("access")
            .and_then(JsonValue::as_str)
            .map(str::to_string),
        _ => None,
    }
}
