//! Descriptor entry types
//!
//! The cross-linked records a mapping descriptor keeps per asserted class,
//! per asserted property, and per generalized subject template.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::template::ReferenceMap;
use crate::vocab;

/// An ordered `(predicate, object reference)` pair extracted from a rule
///
/// A pair whose predicate is one of the reserved type-assertion tokens
/// denotes a class assertion; every other pair is a property edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateObjectEntry {
    /// Predicate IRI or reserved type-assertion token
    pub predicate: String,
    /// Class IRI for a class assertion, object field reference otherwise
    pub object: String,
}

impl PredicateObjectEntry {
    /// Create a predicate-object pair
    pub fn new(predicate: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Whether this entry asserts a class rather than a property edge
    pub fn is_class_assertion(&self) -> bool {
        vocab::is_type_assertion(&self.predicate)
    }
}

/// Position of a generalized template within a triple pattern
///
/// Subject is the only position currently produced; object templates are not
/// generalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemplatePosition {
    /// Subject position
    #[default]
    #[serde(rename = "S")]
    Subject,
}

impl TemplatePosition {
    /// Single-letter position tag
    pub fn tag(&self) -> &'static str {
        match self {
            TemplatePosition::Subject => "S",
        }
    }
}

impl fmt::Display for TemplatePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Descriptor record for an asserted class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassEntry {
    /// Class IRI
    pub iri: String,
    /// Properties asserted alongside this class in the same rule
    pub properties: Vec<String>,
    /// Generalized shape of the owning rule's subject template
    pub template: String,
}

/// Descriptor record for an asserted property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyEntry {
    /// Property IRI
    pub iri: String,
    /// Classes asserted alongside this property in the same rule
    pub classes: Vec<String>,
    /// Generalized shape of the owning rule's subject template
    pub template: String,
    /// Reference map of the owning template
    pub references: ReferenceMap,
    /// The specific object field reference used by this property
    pub reference: String,
}

/// Descriptor record for a generalized subject template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Generalized template string
    pub shape: String,
    /// Classes asserted by rules owning this template
    pub classes: Vec<String>,
    /// Properties asserted by rules owning this template
    pub properties: Vec<String>,
    /// Triple-pattern position the template occupies
    pub position: TemplatePosition,
    /// Placeholder name → original field reference
    pub references: ReferenceMap,
}
