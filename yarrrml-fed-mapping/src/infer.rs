//! Candidate join-pattern inference
//!
//! Derives, from two mapping documents and their descriptor overlap, the six
//! fixed categories of candidate basic-graph-pattern joins a federated query
//! planner can try across the two underlying data sources. Patterns bind the
//! shared term and leave the remaining slots as the variables `?S`, `?P`,
//! `?O`; absence of a join type is an empty list, never an error.

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::compare::{Comparator, ComparatorConfig, ComparisonResult};
use crate::descriptor::{DescriptorBuilder, MappingDescriptor};
use crate::document::MappingDocument;
use crate::error::MappingResult;

/// The three variables a candidate pattern may leave unbound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    /// `?S`
    Subject,
    /// `?P`
    Predicate,
    /// `?O`
    Object,
}

impl Variable {
    /// SPARQL spelling of the variable
    pub fn as_str(&self) -> &'static str {
        match self {
            Variable::Subject => "?S",
            Variable::Predicate => "?P",
            Variable::Object => "?O",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A triple-pattern slot: a bound term or an unbound variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternTerm {
    /// Bound IRI, generalized template, or field reference
    Bound(String),
    /// Unbound variable
    Var(Variable),
}

impl PatternTerm {
    /// Bind a term
    pub fn bound(term: impl Into<String>) -> Self {
        PatternTerm::Bound(term.into())
    }
}

impl fmt::Display for PatternTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternTerm::Bound(term) => f.write_str(term),
            PatternTerm::Var(var) => var.fmt(f),
        }
    }
}

/// A candidate join triple pattern
///
/// Renders (and serializes) as `subject predicate object` separated by
/// single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinPattern {
    /// Subject slot
    pub subject: PatternTerm,
    /// Predicate slot
    pub predicate: PatternTerm,
    /// Object slot
    pub object: PatternTerm,
}

impl JoinPattern {
    /// Create a pattern from its three slots
    pub fn new(subject: PatternTerm, predicate: PatternTerm, object: PatternTerm) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl fmt::Display for JoinPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

impl Serialize for JoinPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Candidate joins grouped into the six fixed categories
///
/// Each list preserves discovery order; repeated emissions are kept rather
/// than deduplicated, so a pattern's multiplicity reflects how many distinct
/// derivations produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JoinCandidates {
    /// A shared class anchors the object position
    #[serde(rename = "object-object")]
    pub object_object: Vec<JoinPattern>,

    /// A shared subject-template shape anchors the subject position
    #[serde(rename = "subject-subject")]
    pub subject_subject: Vec<JoinPattern>,

    /// A shared template that is itself a shared class anchors either end
    #[serde(rename = "subject-object")]
    pub subject_object: Vec<JoinPattern>,

    /// A shared template together with one of its shared properties
    #[serde(rename = "subject,predicate-subject,predicate")]
    pub subject_predicate: Vec<JoinPattern>,

    /// A property both documents map from the same field reference
    #[serde(rename = "predicate_object-predicate_object")]
    pub predicate_object: Vec<JoinPattern>,

    /// A property whose object reference on one side is the other side's
    /// subject-template shape
    #[serde(rename = "subject_predicate-predicate_object")]
    pub subject_predicate_object: Vec<JoinPattern>,
}

impl JoinCandidates {
    /// Category name → patterns, in the fixed taxonomy order
    pub fn categories(&self) -> [(&'static str, &[JoinPattern]); 6] {
        [
            ("object-object", self.object_object.as_slice()),
            ("subject-subject", self.subject_subject.as_slice()),
            ("subject-object", self.subject_object.as_slice()),
            (
                "subject,predicate-subject,predicate",
                self.subject_predicate.as_slice(),
            ),
            (
                "predicate_object-predicate_object",
                self.predicate_object.as_slice(),
            ),
            (
                "subject_predicate-predicate_object",
                self.subject_predicate_object.as_slice(),
            ),
        ]
    }

    /// Total number of candidate patterns across all categories
    pub fn len(&self) -> usize {
        self.categories()
            .iter()
            .map(|(_, patterns)| patterns.len())
            .sum()
    }

    /// Whether every category is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derives candidate joins from a pair of mapping documents
#[derive(Debug, Clone, Default)]
pub struct JoinInferencer {
    comparator: Comparator,
}

impl JoinInferencer {
    /// Inferencer with the default comparison configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Inferencer with an explicit comparison configuration
    pub fn with_config(config: ComparatorConfig) -> Self {
        Self {
            comparator: Comparator::with_config(config),
        }
    }

    /// Build both descriptors, compare them, and derive the candidates
    ///
    /// Fails only if either document is malformed; an empty overlap yields
    /// six empty lists.
    pub fn infer(
        &self,
        doc1: &MappingDocument,
        doc2: &MappingDocument,
    ) -> MappingResult<JoinCandidates> {
        let d1 = DescriptorBuilder::new(doc1).build()?;
        let d2 = DescriptorBuilder::new(doc2).build()?;
        let overlap = self.comparator.compare(&d1, &d2);
        Ok(self.derive(&d1, &d2, &overlap))
    }

    /// Derive the six categories from prebuilt descriptors and their overlap
    pub fn derive(
        &self,
        d1: &MappingDescriptor,
        d2: &MappingDescriptor,
        overlap: &ComparisonResult,
    ) -> JoinCandidates {
        let mut out = JoinCandidates::default();

        // A class asserted by both mappings can anchor the object position.
        for class in &overlap.classes {
            out.object_object.push(JoinPattern::new(
                PatternTerm::Var(Variable::Subject),
                PatternTerm::Var(Variable::Predicate),
                PatternTerm::bound(class.as_str()),
            ));
        }

        // A subject-template shape produced by both mappings anchors the
        // subject position.
        for template in &overlap.templates {
            out.subject_subject.push(JoinPattern::new(
                PatternTerm::bound(template.as_str()),
                PatternTerm::Var(Variable::Predicate),
                PatternTerm::Var(Variable::Object),
            ));
        }

        // A shared template that doubles as a shared class joins one
        // mapping's subjects against the other's objects.
        for template in &overlap.templates {
            if overlap.classes.iter().any(|class| class == template) {
                out.subject_object.push(JoinPattern::new(
                    PatternTerm::bound(template.as_str()),
                    PatternTerm::Var(Variable::Predicate),
                    PatternTerm::Var(Variable::Object),
                ));
                out.subject_object.push(JoinPattern::new(
                    PatternTerm::Var(Variable::Subject),
                    PatternTerm::Var(Variable::Predicate),
                    PatternTerm::bound(template.as_str()),
                ));
            }
        }

        // A shared template whose first document's rule also asserts a
        // shared property pins both the subject shape and the predicate.
        for template in &overlap.templates {
            if let Some(entry) = d1.template(template) {
                for property in &entry.properties {
                    if overlap.properties.contains(property) {
                        out.subject_predicate.push(JoinPattern::new(
                            PatternTerm::bound(template.as_str()),
                            PatternTerm::bound(property.as_str()),
                            PatternTerm::Var(Variable::Object),
                        ));
                    }
                }
            }
        }

        // Properties mapped from the identical field reference on both
        // sides join on the object value.
        for property in d1.properties() {
            if let Some(other) = d2.property(&property.iri) {
                if property.reference == other.reference {
                    out.predicate_object.push(JoinPattern::new(
                        PatternTerm::Var(Variable::Subject),
                        PatternTerm::bound(property.iri.as_str()),
                        PatternTerm::bound(property.reference.as_str()),
                    ));
                }
            }
        }

        // A property whose object reference on one side spells the other
        // side's subject-template shape links object values to subjects.
        for property in d1.properties() {
            let Some(other) = d2.property(&property.iri) else {
                continue;
            };
            if property.reference == other.template {
                out.subject_predicate_object.push(JoinPattern::new(
                    PatternTerm::Var(Variable::Subject),
                    PatternTerm::bound(property.iri.as_str()),
                    PatternTerm::bound(other.reference.as_str()),
                ));
                out.subject_predicate_object.push(JoinPattern::new(
                    PatternTerm::bound(property.template.as_str()),
                    PatternTerm::bound(property.iri.as_str()),
                    PatternTerm::Var(Variable::Object),
                ));
            }
            if other.reference == property.template {
                out.subject_predicate_object.push(JoinPattern::new(
                    PatternTerm::Var(Variable::Subject),
                    PatternTerm::bound(property.iri.as_str()),
                    PatternTerm::bound(property.reference.as_str()),
                ));
                out.subject_predicate_object.push(JoinPattern::new(
                    PatternTerm::bound(other.template.as_str()),
                    PatternTerm::bound(property.iri.as_str()),
                    PatternTerm::Var(Variable::Object),
                ));
            }
        }

        debug!(
            object_object = out.object_object.len(),
            subject_subject = out.subject_subject.len(),
            subject_object = out.subject_object.len(),
            subject_predicate = out.subject_predicate.len(),
            predicate_object = out.predicate_object.len(),
            subject_predicate_object = out.subject_predicate_object.len(),
            "derived join candidates"
        );

        out
    }
}
