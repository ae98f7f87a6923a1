use bson::doc;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use vellum_format::{
    convert, decode, decode_as, encode_variant, resolve_bson, resolve_json, tree_to_document,
    Bson, FormatError, Json,
};
use vellum_models::common::FhirDateTime;
use vellum_models::stu3::{AdministrativeGender, Bundle, Patient};
use vellum_models::{Error, ResourceType};

/// Helper to get test data directory
fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

/// Every JSON fixture, sorted by name
fn json_fixtures() -> Vec<(String, Vec<u8>)> {
    let mut fixtures: Vec<_> = fs::read_dir(test_data_dir())
        .expect("test data directory should exist")
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .map(|path| {
            let bytes = fs::read(&path)
                .unwrap_or_else(|_| panic!("Failed to read {}", path.display()));
            (path.display().to_string(), bytes)
        })
        .collect();
    fixtures.sort();
    assert!(!fixtures.is_empty(), "no JSON fixtures found");
    fixtures
}

#[test]
fn json_to_bson_to_json_is_structurally_equal() {
    for (name, json) in json_fixtures() {
        let bson = convert::<Json, Bson>(&json).unwrap_or_else(|e| panic!("{name}: {e}"));
        let back = convert::<Bson, Json>(&bson).unwrap_or_else(|e| panic!("{name}: {e}"));

        let original: Value = serde_json::from_slice(&json).unwrap();
        let round_tripped: Value = serde_json::from_slice(&back).unwrap();
        assert_eq!(round_tripped, original, "{name}");
    }
}

#[test]
fn bson_and_json_resolve_to_the_same_resource() {
    for (name, json) in json_fixtures() {
        let tree: Value = serde_json::from_slice(&json).unwrap();
        let doc = tree_to_document(tree.clone()).unwrap();

        let from_json = resolve_json(&tree, false).unwrap_or_else(|e| panic!("{name}: {e}"));
        let from_bson = resolve_bson(&doc, false).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(from_bson, from_json, "{name}");
    }
}

#[test]
fn searchset_bundle_entries_resolve_through_bson() {
    let json = fs::read(test_data_dir().join("bundle-searchset.json")).unwrap();
    let bytes = convert::<Json, Bson>(&json).unwrap();

    let bundle: Bundle = decode_as::<Bson, Bundle>(&bytes).unwrap();
    let kinds: Vec<_> = bundle.resources().map(|r| r.resource_type()).collect();
    assert_eq!(
        kinds,
        [ResourceType::Patient, ResourceType::Coverage, ResourceType::OperationOutcome]
    );
    assert!(bundle.is_searchset());
    assert_eq!(bundle.total, Some(2));
}

#[test]
fn stored_date_forms_decode_into_date_values() {
    let doc = doc! {
        "resourceType": "Patient",
        "meta": { "lastUpdated": bson::DateTime::from_millis(1_408_326_213_000) },
        "birthDate": {
            "__from": bson::DateTime::from_millis(157_161_600_000),
            "__to": bson::DateTime::from_millis(157_248_000_000),
            "__strDate": "1974-12-25",
        },
        "gender": "male",
    };

    let resource = resolve_bson(&doc, false).unwrap();
    let patient = resource.downcast_ref::<Patient>().unwrap();
    assert_eq!(patient.gender, Some(AdministrativeGender::Male));
    assert_eq!(patient.birth_date, Some("1974-12-25".parse::<FhirDateTime>().unwrap()));

    let last_updated = patient.base.resource.meta.as_ref().unwrap().last_updated.unwrap();
    assert_eq!(last_updated.to_string(), "2014-08-18T01:43:33Z");
}

#[test]
fn dates_are_written_back_as_strings() {
    let doc = doc! {
        "resourceType": "Patient",
        "birthDate": { "__strDate": "1974-12" },
    };
    let resource = resolve_bson(&doc, false).unwrap();

    let bytes = vellum_format::encode::<Bson>(&resource).unwrap();
    let written = bson::Document::from_reader(&mut bytes.as_slice()).unwrap();
    assert_eq!(written.get_str("birthDate").unwrap(), "1974-12");
}

#[test]
fn whole_decimals_stay_integers_through_bson() {
    let tree = json!({
        "resourceType": "Observation",
        "status": "final",
        "valueQuantity": {"value": 185, "unit": "lbs"}
    });
    let resource = resolve_json(&tree, false).unwrap();

    let bytes = vellum_format::encode::<Bson>(&resource).unwrap();
    let written = bson::Document::from_reader(&mut bytes.as_slice()).unwrap();
    let value = written.get_document("valueQuantity").unwrap().get("value").unwrap();
    assert_eq!(value, &bson::Bson::Int32(185));

    let back = vellum_format::encode::<Json>(&resource).unwrap();
    assert_eq!(serde_json::from_slice::<Value>(&back).unwrap(), tree);
}

#[test]
fn unsupported_bson_elements_are_reported() {
    let doc = doc! {
        "resourceType": "Basic",
        "code": { "text": bson::Bson::MaxKey },
    };
    let mut bytes = Vec::new();
    doc.to_writer(&mut bytes).unwrap();

    match decode::<Bson>(&bytes).unwrap_err() {
        FormatError::UnsupportedBsonType { key, element_type } => {
            assert_eq!(key, "code.text");
            assert_eq!(element_type, "MaxKey");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn top_level_decode_requires_a_discriminant() {
    let err = decode::<Json>(br#"{"id": "anonymous"}"#).unwrap_err();
    assert!(matches!(
        err,
        FormatError::Resolve(Error::MissingDiscriminant { .. })
    ));
}

#[test]
fn typed_decode_reports_mismatch() {
    let err = decode_as::<Json, Bundle>(br#"{"resourceType": "Patient"}"#).unwrap_err();
    match err {
        FormatError::Resolve(Error::DiscriminantMismatch { expected, found }) => {
            assert_eq!(expected, ResourceType::Bundle);
            assert_eq!(found, "Patient");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn encode_variant_injects_the_discriminant() {
    let patient = Patient {
        gender: Some(AdministrativeGender::Unknown),
        ..Default::default()
    };

    let bytes = encode_variant::<Json, _>(&patient).unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value, json!({"resourceType": "Patient", "gender": "unknown"}));

    let bytes = encode_variant::<Bson, _>(&patient).unwrap();
    let decoded = decode_as::<Bson, Patient>(&bytes).unwrap();
    assert_eq!(decoded, patient);
}
