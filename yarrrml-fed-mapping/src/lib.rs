//! YARRRML mapping overlap analysis and federated join inference
//!
//! This crate analyzes pairs of declarative YARRRML mapping documents (YAML
//! documents describing how tabular or semi-structured sources map to RDF
//! triples), infers which parts of the two mappings overlap, and proposes
//! candidate basic-graph-pattern joins usable to federate SPARQL queries
//! across the two underlying data sources.
//!
//! # Key Features
//!
//! - **Key resolution**: full and abbreviated YARRRML key spellings resolve
//!   through one synonym table
//! - **Template generalization**: subject templates are renumbered to
//!   positional placeholders so structurally identical templates compare
//!   equal across sources
//! - **Mapping descriptors**: asserted classes, properties, generalized
//!   templates, and the declared data source, cross-linked per document
//! - **Overlap comparison**: ignore-list-filtered intersections under an
//!   explicit, overridable configuration
//! - **Join inference**: six fixed categories of candidate join patterns
//!
//! # Usage
//!
//! Documents arrive already parsed (the `yfed` CLI transcodes YAML at the
//! boundary); the core operates on the generic JSON document value.
//!
//! ```
//! use serde_json::json;
//! use yarrrml_fed_mapping::{Comparator, DescriptorBuilder, MappingDocument};
//!
//! let doc = MappingDocument::new(json!({
//!     "mappings": {
//!         "person": {
//!             "subject": "http://ex.org/person/$(id)",
//!             "po": [["a", "http://ex.org/Person"]]
//!         }
//!     },
//!     "sources": { "people": ["data/people.csv~csvw"] }
//! }));
//!
//! let descriptor = DescriptorBuilder::new(&doc).build()?;
//! assert_eq!(descriptor.dataset(), Some("data/people.csv~csvw"));
//!
//! let overlap = Comparator::new().compare(&descriptor, &descriptor);
//! assert_eq!(overlap.classes, vec!["http://ex.org/Person"]);
//! # Ok::<(), yarrrml_fed_mapping::MappingError>(())
//! ```

pub mod compare;
pub mod descriptor;
pub mod document;
pub mod error;
pub mod infer;
pub mod template;
pub mod vocab;

pub use compare::{Comparator, ComparatorConfig, ComparisonResult};
pub use descriptor::{
    ClassEntry, DescriptorBuilder, MappingDescriptor, PredicateObjectEntry, PropertyEntry,
    TemplateEntry, TemplatePosition,
};
pub use document::{resolve, CanonicalKey, MappingDocument};
pub use error::{MappingError, MappingResult};
pub use infer::{JoinCandidates, JoinInferencer, JoinPattern, PatternTerm, Variable};
pub use template::{GeneralizedTemplate, ReferenceMap};
