//! Mapping descriptors
//!
//! A [`MappingDescriptor`] is the normalized structural summary of one
//! mapping document: which classes and properties its rules assert, the
//! generalized shapes of its subject templates, and the data source it
//! declares, each cross-linked to the others. Descriptors are produced by
//! [`DescriptorBuilder`], never mutated afterwards, and feed the comparator
//! and the join inferencer.

mod builder;
mod entry;

pub use builder::DescriptorBuilder;
pub use entry::{
    ClassEntry, PredicateObjectEntry, PropertyEntry, TemplateEntry, TemplatePosition,
};

use std::collections::HashMap;

/// Structural summary of one mapping document
///
/// The three entry collections iterate in first-insertion order (the order
/// the source document declares them), with keyed lookup alongside.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingDescriptor {
    classes: Vec<ClassEntry>,
    class_index: HashMap<String, usize>,

    properties: Vec<PropertyEntry>,
    property_index: HashMap<String, usize>,

    templates: Vec<TemplateEntry>,
    template_index: HashMap<String, usize>,

    dataset: Option<String>,
    multiple_sources: bool,
}

impl MappingDescriptor {
    /// Iterate class entries in document order
    pub fn classes(&self) -> impl Iterator<Item = &ClassEntry> {
        self.classes.iter()
    }

    /// Iterate asserted class IRIs in document order
    pub fn class_iris(&self) -> impl Iterator<Item = &str> + '_ {
        self.classes.iter().map(|entry| entry.iri.as_str())
    }

    /// Look up a class entry by IRI
    pub fn class(&self, iri: &str) -> Option<&ClassEntry> {
        self.class_index.get(iri).map(|&idx| &self.classes[idx])
    }

    /// Whether the descriptor asserts a class
    pub fn contains_class(&self, iri: &str) -> bool {
        self.class_index.contains_key(iri)
    }

    /// Iterate property entries in document order
    pub fn properties(&self) -> impl Iterator<Item = &PropertyEntry> {
        self.properties.iter()
    }

    /// Iterate asserted property IRIs in document order
    pub fn property_iris(&self) -> impl Iterator<Item = &str> + '_ {
        self.properties.iter().map(|entry| entry.iri.as_str())
    }

    /// Look up a property entry by IRI
    pub fn property(&self, iri: &str) -> Option<&PropertyEntry> {
        self.property_index
            .get(iri)
            .map(|&idx| &self.properties[idx])
    }

    /// Whether the descriptor asserts a property
    pub fn contains_property(&self, iri: &str) -> bool {
        self.property_index.contains_key(iri)
    }

    /// Iterate template entries in document order
    pub fn templates(&self) -> impl Iterator<Item = &TemplateEntry> {
        self.templates.iter()
    }

    /// Iterate generalized template shapes in document order
    pub fn template_shapes(&self) -> impl Iterator<Item = &str> + '_ {
        self.templates.iter().map(|entry| entry.shape.as_str())
    }

    /// Look up a template entry by generalized shape
    pub fn template(&self, shape: &str) -> Option<&TemplateEntry> {
        self.template_index
            .get(shape)
            .map(|&idx| &self.templates[idx])
    }

    /// Whether the descriptor contains a generalized template shape
    pub fn contains_template(&self, shape: &str) -> bool {
        self.template_index.contains_key(shape)
    }

    /// Identifier of the document's first declared data source
    pub fn dataset(&self) -> Option<&str> {
        self.dataset.as_deref()
    }

    /// Whether the document declared more than one data source
    ///
    /// Only the first source is used; this flag keeps the simplification
    /// auditable instead of silent.
    pub fn declares_multiple_sources(&self) -> bool {
        self.multiple_sources
    }

    /// Whether the descriptor carries no classes, properties, or templates
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.properties.is_empty() && self.templates.is_empty()
    }

    pub(crate) fn set_dataset(&mut self, dataset: Option<String>, multiple_sources: bool) {
        self.dataset = dataset;
        self.multiple_sources = multiple_sources;
    }

    // Insert-or-replace: a key asserted again by a later rule replaces the
    // earlier payload but keeps its original position.

    pub(crate) fn insert_class(&mut self, entry: ClassEntry) {
        match self.class_index.get(&entry.iri) {
            Some(&idx) => self.classes[idx] = entry,
            None => {
                self.class_index.insert(entry.iri.clone(), self.classes.len());
                self.classes.push(entry);
            }
        }
    }

    pub(crate) fn insert_property(&mut self, entry: PropertyEntry) {
        match self.property_index.get(&entry.iri) {
            Some(&idx) => self.properties[idx] = entry,
            None => {
                self.property_index
                    .insert(entry.iri.clone(), self.properties.len());
                self.properties.push(entry);
            }
        }
    }

    pub(crate) fn insert_template(&mut self, entry: TemplateEntry) {
        match self.template_index.get(&entry.shape) {
            Some(&idx) => self.templates[idx] = entry,
            None => {
                self.template_index
                    .insert(entry.shape.clone(), self.templates.len());
                self.templates.push(entry);
            }
        }
    }
}
