//! End-to-end analysis scenarios over inline YARRRML fixtures

use yarrrml_fed_mapping::{
    Comparator, ComparatorConfig, DescriptorBuilder, GeneralizedTemplate, JoinInferencer,
    MappingDocument,
};

fn doc(yaml: &str) -> MappingDocument {
    MappingDocument::new(serde_yaml::from_str(yaml).expect("valid fixture"))
}

const DOC_A: &str = r#"
    mappings:
      person:
        subject: http://ex.org/person/$(id)
        po:
          - [a, http://ex.org/Person]
          - [http://ex.org/name, $(name)]
    sources:
      people:
        - data/people.csv~csvw
"#;

const DOC_B: &str = r#"
    mappings:
      person:
        subject: http://ex.org/person/$(pid)
        po:
          - [a, http://ex.org/Person]
          - [http://ex.org/name, $(name)]
    sources:
      persons:
        - data/persons.csv~csvw
"#;

/// The name property counts as a generic label term for this fixture
/// vocabulary, mirroring the label/name/prefLabel defaults.
fn fixture_config() -> ComparatorConfig {
    let mut config = ComparatorConfig::default();
    config
        .ignored_properties
        .push("http://ex.org/name".to_string());
    config
}

#[test]
fn it_compares_two_person_mappings() {
    let d1 = DescriptorBuilder::new(&doc(DOC_A)).build().unwrap();
    let d2 = DescriptorBuilder::new(&doc(DOC_B)).build().unwrap();

    let overlap = Comparator::with_config(fixture_config()).compare(&d1, &d2);

    assert_eq!(overlap.classes, vec!["http://ex.org/Person"]);
    // The name property overlaps but is a generic term, so it is excluded.
    assert!(overlap.properties.is_empty());
    assert_eq!(overlap.templates, vec!["http://ex.org/person/$(field1)"]);
    assert_eq!(
        overlap.datasets,
        [
            Some("data/people.csv~csvw".to_string()),
            Some("data/persons.csv~csvw".to_string())
        ]
    );
}

#[test]
fn it_infers_subject_subject_join_for_shared_template() {
    let joins = JoinInferencer::with_config(fixture_config())
        .infer(&doc(DOC_A), &doc(DOC_B))
        .unwrap();

    let subject_subject: Vec<String> = joins
        .subject_subject
        .iter()
        .map(|pattern| pattern.to_string())
        .collect();
    assert!(subject_subject.contains(&"http://ex.org/person/$(field1) ?P ?O".to_string()));

    // The shared class still anchors an object-object candidate.
    let object_object: Vec<String> = joins
        .object_object
        .iter()
        .map(|pattern| pattern.to_string())
        .collect();
    assert_eq!(object_object, vec!["?S ?P http://ex.org/Person"]);
}

#[test]
fn it_builds_idempotent_descriptors() {
    let document = doc(DOC_A);
    let first = DescriptorBuilder::new(&document).build().unwrap();
    let second = DescriptorBuilder::new(&document).build().unwrap();
    assert_eq!(first, second);
}

#[test]
fn it_excludes_default_ignored_terms_from_any_result() {
    let generic = r#"
        mappings:
          thing:
            subject: http://ex.org/thing/$(id)
            po:
              - [a, "https://schema.org/Thing"]
              - ["https://schema.org/name", $(name)]
              - ["http://www.w3.org/2004/02/skos/core#prefLabel", $(label)]
    "#;
    let d = DescriptorBuilder::new(&doc(generic)).build().unwrap();
    let overlap = Comparator::new().compare(&d, &d);

    assert!(overlap.classes.is_empty());
    assert!(overlap.properties.is_empty());
    // Templates have no ignore list.
    assert_eq!(overlap.templates, vec!["http://ex.org/thing/$(field1)"]);
}

#[test]
fn it_compares_document_against_itself() {
    let d = DescriptorBuilder::new(&doc(DOC_A)).build().unwrap();
    let overlap = Comparator::new().compare(&d, &d);

    assert_eq!(overlap.classes, vec!["http://ex.org/Person"]);
    assert_eq!(overlap.properties, vec!["http://ex.org/name"]);
    assert_eq!(overlap.templates, vec!["http://ex.org/person/$(field1)"]);
    assert_eq!(
        overlap.datasets,
        [
            Some("data/people.csv~csvw".to_string()),
            Some("data/people.csv~csvw".to_string())
        ]
    );
}

#[test]
fn it_round_trips_generalized_templates() {
    let original = "http://ex.org/person/$(id)/$(name)";
    let generalized = GeneralizedTemplate::generalize(original);
    assert_eq!(generalized.expand(), original);
}

#[test]
fn it_serializes_join_candidates_under_category_names() {
    let joins = JoinInferencer::new()
        .infer(&doc(DOC_A), &doc(DOC_B))
        .unwrap();
    let value = serde_json::to_value(&joins).unwrap();

    let object = value.as_object().unwrap();
    for category in [
        "object-object",
        "subject-subject",
        "subject-object",
        "subject,predicate-subject,predicate",
        "predicate_object-predicate_object",
        "subject_predicate-predicate_object",
    ] {
        assert!(object.contains_key(category), "missing {category}");
        assert!(object[category].is_array());
    }

    assert_eq!(
        value["subject-subject"],
        serde_json::json!(["http://ex.org/person/$(field1) ?P ?O"])
    );
    // Both documents map name from the same reference; category five works
    // on the raw per-document property maps, not the filtered overlap.
    assert_eq!(
        value["predicate_object-predicate_object"],
        serde_json::json!(["?S http://ex.org/name $(name)"])
    );
}
