//! Engine-level tests for the anonymizing tree transform

use jsonveil::anonymization::{AnonymizationEngine, LeafClass, LeafClassifier};
use jsonveil::config::RunConfig;
use serde_json::{json, Value};
use uuid::Uuid;

fn engine(rename_keys: bool) -> AnonymizationEngine {
    let config = RunConfig {
        source_path: "input.json".into(),
        rename_keys,
        output_dir: ".".into(),
        max_depth: 128,
    };
    AnonymizationEngine::new(&config).expect("Failed to create engine")
}

#[test]
fn test_generated_v4_uuids_hash_deterministically() {
    let engine = engine(false);

    for _ in 0..20 {
        let id = Uuid::new_v4().to_string();
        let input = json!(id);

        let first = engine.anonymize(&input).unwrap();
        let second = engine.anonymize(&input).unwrap();

        assert_eq!(first, second, "digest for {id} is not stable");
        assert_eq!(first.as_str().unwrap().len(), 64);
    }
}

#[test]
fn test_generated_word_is_not_uuid_shaped() {
    let engine = engine(false);
    let classifier = LeafClassifier::new().unwrap();

    for _ in 0..50 {
        let output = engine.anonymize(&json!("some free text")).unwrap();
        let word = output.as_str().unwrap();

        assert!(!word.contains(char::is_whitespace));
        assert_eq!(classifier.classify(word), LeafClass::FreeText);
    }
}

#[test]
fn test_distinct_uuids_get_distinct_digests() {
    let engine = engine(false);

    let a = engine
        .anonymize(&json!("550e8400-e29b-41d4-a716-446655440000"))
        .unwrap();
    let b = engine
        .anonymize(&json!("6ba7b810-9dad-11d1-80b4-00c04fd430c8"))
        .unwrap();

    assert_ne!(a, b);
}

#[test]
fn test_mixed_document_shape_and_rename() {
    let engine = engine(true);
    let input = json!({
        "ehr_id": "550e8400-e29b-41d4-a716-446655440000",
        "committed_at": "2023-06-15T12:30:45.500Z",
        "archetype_node_id": "at0001",
        "entries": [
            {"entry_id": 7, "free_text": "blood pressure normal"},
            {"entry_id": 8, "free_text": "follow up in two weeks"}
        ],
        "active": true,
        "revision": null
    });

    let output = engine.anonymize(&input).unwrap();
    let root = output.as_object().unwrap();

    let keys: Vec<_> = root.keys().cloned().collect();
    assert_eq!(
        keys,
        vec![
            "ehrId",
            "committedAt",
            "archetypeNodeId",
            "entries",
            "active",
            "revision"
        ]
    );

    assert_eq!(root["committedAt"], json!(1686832245500_i64));
    assert_eq!(root["active"], json!(true));
    assert_eq!(root["revision"], json!(null));

    let entries = root["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    for entry in entries {
        let fields = entry.as_object().unwrap();
        assert_eq!(fields.len(), 2);
        assert!(fields["entryId"].is_number());
        assert!(fields["freeText"].is_string());
    }
}

#[test]
fn test_uuid_inside_larger_string_is_free_text() {
    // Classification anchors on the whole leaf, not substrings
    let engine = engine(false);
    let input = json!("id: 550e8400-e29b-41d4-a716-446655440000");

    let output = engine.anonymize(&input).unwrap();
    let word = output.as_str().unwrap();
    assert_ne!(
        word,
        "id: 550e8400-e29b-41d4-a716-446655440000".to_string()
    );
    assert!(!word.contains(char::is_whitespace));
}

#[test]
fn test_empty_containers_pass_through() {
    let engine = engine(true);
    assert_eq!(engine.anonymize(&json!({})).unwrap(), json!({}));
    assert_eq!(engine.anonymize(&json!([])).unwrap(), json!([]));
}

#[test]
fn test_key_count_preserved_absent_collisions() {
    let engine = engine(true);
    let input = json!({
        "first_name": "a",
        "last_name": "b",
        "dob": "c",
        "street_address": "d"
    });

    let output = engine.anonymize(&input).unwrap();
    assert_eq!(output.as_object().unwrap().len(), 4);
}

#[test]
fn test_rename_disabled_keeps_snake_case() {
    let engine = engine(false);
    let input = json!({"user_id": "x"});
    let output = engine.anonymize(&input).unwrap();
    assert!(output.as_object().unwrap().contains_key("user_id"));
}

#[test]
fn test_numbers_survive_rename_pass() {
    let engine = engine(true);
    let input = json!({"big_value": 9007199254740993_i64, "small_value": -0.5});
    let output: Value = engine.anonymize(&input).unwrap();
    let fields = output.as_object().unwrap();
    assert_eq!(fields["bigValue"], json!(9007199254740993_i64));
    assert_eq!(fields["smallValue"], json!(-0.5));
}
