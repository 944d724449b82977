//! Subject-template generalization
//!
//! A subject template such as `http://ex.org/person/$(id)` names the fields
//! of its own data source, so templates from different sources never compare
//! equal verbatim. Generalization renumbers each distinct field reference to
//! a positional placeholder (`$(field1)`, `$(field2)`, ...) in order of first
//! occurrence, which makes structurally identical templates compare equal as
//! strings while a reference map keeps the way back to the original fields.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Field-reference syntax: `$(reference)`, non-greedy
static FIELD_REFERENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\(([^)]+?)\)").expect("valid regex"));

/// Canonical placeholder name → original field reference
pub type ReferenceMap = HashMap<String, String>;

/// A template with field references renumbered to positional placeholders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralizedTemplate {
    /// The canonical template string
    pub shape: String,
    /// Placeholder name → original field reference
    pub references: ReferenceMap,
}

impl GeneralizedTemplate {
    /// Generalize a template string
    ///
    /// Distinct references are numbered by first occurrence, 1-indexed, and
    /// each replacement rewrites every occurrence of that reference in the
    /// template. Repeated occurrences of one reference therefore share a
    /// single placeholder. A template without references generalizes to
    /// itself with an empty map.
    pub fn generalize(template: &str) -> Self {
        let mut shape = template.to_string();
        let mut references = ReferenceMap::new();

        for cap in FIELD_REFERENCE_RE.captures_iter(template) {
            let occurrence = &cap[0];
            let reference = &cap[1];
            if references.values().any(|seen| seen == reference) {
                continue;
            }
            let placeholder = format!("field{}", references.len() + 1);
            shape = shape.replace(occurrence, &format!("$({placeholder})"));
            references.insert(placeholder, reference.to_string());
        }

        Self { shape, references }
    }

    /// Substitute the original references back into the shape
    pub fn expand(&self) -> String {
        // Highest-numbered placeholders first: substituting field1 may spell
        // out a later placeholder's token, which must not be rewritten again.
        let mut entries: Vec<(&str, &str)> = self
            .references
            .iter()
            .map(|(placeholder, reference)| (placeholder.as_str(), reference.as_str()))
            .collect();
        entries.sort_by_key(|(placeholder, _)| std::cmp::Reverse(placeholder_index(placeholder)));

        let mut template = self.shape.clone();
        for (placeholder, reference) in entries {
            template = template.replace(&format!("$({placeholder})"), &format!("$({reference})"));
        }
        template
    }

    /// Whether the template contained any field references
    pub fn has_references(&self) -> bool {
        !self.references.is_empty()
    }
}

fn placeholder_index(placeholder: &str) -> usize {
    placeholder
        .strip_prefix("field")
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_reference() {
        let generalized = GeneralizedTemplate::generalize("http://ex.org/person/$(id)");
        assert_eq!(generalized.shape, "http://ex.org/person/$(field1)");
        assert_eq!(generalized.references.len(), 1);
        assert_eq!(generalized.references["field1"], "id");
    }

    #[test]
    fn test_references_numbered_by_first_occurrence() {
        let generalized = GeneralizedTemplate::generalize("http://ex.org/$(country)/$(city)");
        assert_eq!(generalized.shape, "http://ex.org/$(field1)/$(field2)");
        assert_eq!(generalized.references["field1"], "country");
        assert_eq!(generalized.references["field2"], "city");
    }

    #[test]
    fn test_no_references_is_identity() {
        let generalized = GeneralizedTemplate::generalize("http://ex.org/Person");
        assert_eq!(generalized.shape, "http://ex.org/Person");
        assert!(generalized.references.is_empty());
        assert!(!generalized.has_references());
    }

    #[test]
    fn test_field_names_do_not_affect_shape() {
        let a = GeneralizedTemplate::generalize("http://ex.org/person/$(id)");
        let b = GeneralizedTemplate::generalize("http://ex.org/person/$(pid)");
        assert_eq!(a.shape, b.shape);
    }

    #[test]
    fn test_generalize_is_deterministic() {
        let template = "http://ex.org/$(a)/$(b)/$(a)";
        assert_eq!(
            GeneralizedTemplate::generalize(template),
            GeneralizedTemplate::generalize(template)
        );
    }

    #[test]
    fn test_repeated_reference_shares_placeholder() {
        let generalized = GeneralizedTemplate::generalize("$(x)-$(y)-$(x)");
        assert_eq!(generalized.shape, "$(field1)-$(field2)-$(field1)");
        assert_eq!(generalized.references.len(), 2);
        assert_eq!(generalized.references["field1"], "x");
        assert_eq!(generalized.references["field2"], "y");
    }

    #[test]
    fn test_expand_round_trip() {
        for template in [
            "http://ex.org/person/$(id)",
            "http://ex.org/$(country)/$(city)/street/$(street)",
            "no references at all",
            "$(x)-$(y)-$(x)",
        ] {
            let generalized = GeneralizedTemplate::generalize(template);
            assert_eq!(generalized.expand(), template);
        }
    }

    #[test]
    fn test_expand_round_trip_with_placeholder_like_reference() {
        // A source field named like a placeholder must survive the round trip.
        let generalized = GeneralizedTemplate::generalize("$(field2)/$(x)");
        assert_eq!(generalized.shape, "$(field1)/$(field2)");
        assert_eq!(generalized.expand(), "$(field2)/$(x)");
    }
}
