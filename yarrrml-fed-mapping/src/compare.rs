//! Descriptor overlap comparison
//!
//! Computes the shared classes, properties, and generalized subject
//! templates of two mapping descriptors, filtered by configurable ignore
//! lists of generic vocabulary terms.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::descriptor::MappingDescriptor;
use crate::vocab::GenericVocab;

/// Ignore-list configuration for overlap comparison
///
/// Classes and properties listed here are excluded from intersections
/// regardless of actual overlap; a term asserted by nearly every mapping
/// would only produce useless joins. The defaults carry the usual generic
/// suspects and can be extended or replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparatorConfig {
    /// Class IRIs excluded from the shared-classes intersection
    pub ignored_classes: Vec<String>,
    /// Property IRIs excluded from the shared-properties intersection
    pub ignored_properties: Vec<String>,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            ignored_classes: vec![GenericVocab::SCHEMA_THING.to_string()],
            ignored_properties: vec![
                GenericVocab::RDFS_LABEL.to_string(),
                GenericVocab::SCHEMA_NAME.to_string(),
                GenericVocab::SKOS_PREF_LABEL.to_string(),
            ],
        }
    }
}

impl ComparatorConfig {
    /// A configuration that ignores nothing
    pub fn empty() -> Self {
        Self {
            ignored_classes: Vec::new(),
            ignored_properties: Vec::new(),
        }
    }

    /// Whether a class IRI is excluded from comparison
    pub fn is_ignored_class(&self, iri: &str) -> bool {
        self.ignored_classes.iter().any(|ignored| ignored == iri)
    }

    /// Whether a property IRI is excluded from comparison
    pub fn is_ignored_property(&self, iri: &str) -> bool {
        self.ignored_properties.iter().any(|ignored| ignored == iri)
    }
}

/// Overlap between two mapping descriptors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Classes asserted by both descriptors, ignore-filtered
    pub classes: Vec<String>,
    /// Properties asserted by both descriptors, ignore-filtered
    pub properties: Vec<String>,
    /// Generalized subject templates present in both descriptors
    pub templates: Vec<String>,
    /// Ordered pair of both documents' dataset identifiers, duplicates kept
    pub datasets: [Option<String>; 2],
}

impl ComparisonResult {
    /// Whether no classes, properties, or templates are shared
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.properties.is_empty() && self.templates.is_empty()
    }
}

/// Compares mapping descriptors under an ignore-list configuration
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    config: ComparatorConfig,
}

impl Comparator {
    /// Comparator with the default ignore lists
    pub fn new() -> Self {
        Self::default()
    }

    /// Comparator with an explicit configuration
    pub fn with_config(config: ComparatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Compute the overlap between two descriptors
    ///
    /// Iteration follows `d2`: the output sets list shared terms in `d2`'s
    /// document order, so `compare(d1, d2)` and `compare(d2, d1)` may order
    /// (but never disagree on) the shared terms differently. Templates
    /// intersect on generalized-string equality and have no ignore list.
    pub fn compare(&self, d1: &MappingDescriptor, d2: &MappingDescriptor) -> ComparisonResult {
        let classes: Vec<String> = d2
            .class_iris()
            .filter(|iri| d1.contains_class(iri) && !self.config.is_ignored_class(iri))
            .map(str::to_string)
            .collect();

        let properties: Vec<String> = d2
            .property_iris()
            .filter(|iri| d1.contains_property(iri) && !self.config.is_ignored_property(iri))
            .map(str::to_string)
            .collect();

        let templates: Vec<String> = d2
            .template_shapes()
            .filter(|shape| d1.contains_template(shape))
            .map(str::to_string)
            .collect();

        debug!(
            classes = classes.len(),
            properties = properties.len(),
            templates = templates.len(),
            "computed descriptor overlap"
        );

        ComparisonResult {
            classes,
            properties,
            templates,
            datasets: [
                d1.dataset().map(str::to_string),
                d2.dataset().map(str::to_string),
            ],
        }
    }
}
