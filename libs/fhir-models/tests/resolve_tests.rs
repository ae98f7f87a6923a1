use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::{fs::File, path::PathBuf};
use vellum_models::stu3::{
    AdministrativeGender, Bundle, CarePlan, Goal, HttpVerb, IssueSeverity, Observation,
    OperationOutcome, Patient,
};
use vellum_models::{resolve, resolve_as, Error, Resource, ResourceType};

fn load_fixture(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name);
    assert!(path.exists(), "fixture missing at {:?}", path);

    let file = File::open(&path).expect("failed to open fixture");
    serde_json::from_reader(file).expect("failed to parse fixture")
}

#[test]
fn every_variant_resolves_from_minimal_document() {
    for resource_type in ResourceType::ALL {
        let tree = json!({"resourceType": resource_type.as_str()});
        let resource = resolve(&tree, false).unwrap();
        assert_eq!(resource.resource_type(), *resource_type);
        assert_eq!(serde_json::to_value(&resource).unwrap(), tree);
    }
}

#[test]
fn missing_discriminant_is_reported() {
    let err = resolve(&json!({"id": "x", "gender": "male"}), false).unwrap_err();
    assert!(matches!(err, Error::MissingDiscriminant { .. }), "{err}");
}

#[test]
fn unknown_name_is_never_coerced() {
    let err = resolve(&json!({"resourceType": "Bogus"}), false).unwrap_err();
    match err {
        Error::UnrecognizedVariant(name) => assert_eq!(name, "Bogus"),
        other => panic!("unexpected error: {other}"),
    }

    let tree = json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [
            {"resource": {"resourceType": "Patient"}},
            {"resource": {"resourceType": "Bogus"}}
        ]
    });
    assert!(matches!(
        resolve(&tree, false),
        Err(Error::UnrecognizedVariant(ref name)) if name == "Bogus"
    ));
}

#[test]
fn bundle_entry_patient_resolves_with_fields() {
    let tree = json!({
        "resourceType": "Bundle",
        "type": "searchset",
        "entry": [{"resource": {"resourceType": "Patient", "gender": "male"}}]
    });

    let bundle = resolve(&tree, false).unwrap().into_variant::<Bundle>().unwrap();
    let patient = bundle.entry[0]
        .resource
        .as_ref()
        .and_then(|r| r.downcast_ref::<Patient>())
        .expect("entry should hold a Patient");
    assert_eq!(patient.gender, Some(AdministrativeGender::Male));
}

#[test]
fn care_plan_contained_resources_resolve_by_their_own_type() {
    let tree = load_fixture("careplan-contained.json");
    let resource = resolve(&tree, false).unwrap();

    let contained = resource.contained();
    assert_eq!(contained.len(), 2);
    assert!(contained[0].downcast_ref::<Patient>().is_some());
    assert!(contained[1].downcast_ref::<Goal>().is_some());

    let care_plan = resource.downcast_ref::<CarePlan>().unwrap();
    assert_eq!(care_plan.contained_subject().and_then(Resource::id), Some("p1"));

    assert_eq!(serde_json::to_value(&resource).unwrap(), tree);
}

#[test]
fn transaction_response_bundle_resolves_all_sites() {
    let tree = load_fixture("bundle-transaction-response.json");
    let resource = resolve(&tree, false).unwrap();

    let embedded: Vec<_> = resource
        .embedded()
        .into_iter()
        .map(|(location, r)| (location, r.resource_type()))
        .collect();
    assert_eq!(
        embedded,
        [
            ("entry[0].resource".to_string(), ResourceType::Patient),
            ("entry[1].response.outcome".to_string(), ResourceType::OperationOutcome),
            ("entry[2].resource".to_string(), ResourceType::Coverage),
        ]
    );

    let bundle = resource.downcast_ref::<Bundle>().unwrap();
    let outcome = bundle.entry[1]
        .response
        .as_ref()
        .and_then(|r| r.outcome.as_ref())
        .and_then(|r| r.downcast_ref::<OperationOutcome>())
        .unwrap();
    assert_eq!(outcome.issue[0].severity, Some(IssueSeverity::Information));

    let request = bundle.entry[2].request.as_ref().unwrap();
    assert_eq!(request.method, Some(HttpVerb::Put));
    assert_eq!(request.to_string(), "PUT Coverage/part-b | If-Match: W/\"3\"");
    assert_eq!(
        bundle.entry[0].response.as_ref().unwrap().to_string(),
        "201 Created | Location: Patient/123/_history/1 | Etag: W/\"1\" \
         | Last-Modified: Mon, 18 Aug 2014 01:43:33 GMT"
    );

    let coverage = bundle.entry[2].resource.as_ref().unwrap();
    assert_eq!(coverage.contained()[0].resource_type(), ResourceType::Basic);

    assert_eq!(serde_json::to_value(&resource).unwrap(), tree);
}

#[test]
fn nested_failure_fails_the_whole_resolution() {
    let tree = json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [
            {"resource": {"resourceType": "Patient"}},
            {"resource": {
                "resourceType": "CarePlan",
                "contained": [{"resourceType": "Goal"}, {"id": "no-type"}]
            }}
        ]
    });

    match resolve(&tree, false).unwrap_err() {
        Error::MissingDiscriminant { location } => {
            assert_eq!(location, "Bundle.entry[1].resource.contained[1]")
        }
        other => panic!("unexpected error: {other}"),
    }

    match resolve(&tree, true).unwrap_err() {
        Error::UnknownVariant { location } => {
            assert_eq!(location, "Bundle.entry[1].resource.contained[1]")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_date_is_a_malformed_field() {
    let tree = json!({"resourceType": "Patient", "birthDate": "not-a-date"});
    match resolve(&tree, false).unwrap_err() {
        Error::MalformedField { location, message } => {
            assert_eq!(location, "Patient");
            assert!(message.contains("not-a-date"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn date_shapes_are_exact() {
    let tree = json!({"resourceType": "Patient", "birthDate": "2017-3-4"});
    assert!(matches!(resolve(&tree, false), Err(Error::MalformedField { .. })));

    let tree = json!({
        "resourceType": "Observation",
        "status": "final",
        "valueTime": "13:28:17.5"
    });
    let resource = resolve(&tree, false).unwrap();
    assert_eq!(serde_json::to_value(&resource).unwrap(), tree);
}

#[test]
fn typed_decode_checks_and_sets_the_discriminant() {
    let err = resolve_as::<Bundle>(&json!({"resourceType": "Patient"})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected resourceType to be Bundle, instead received Patient"
    );

    let observation: Observation = resolve_as(&json!({"status": "final"})).unwrap();
    assert_eq!(
        serde_json::to_value(&observation).unwrap(),
        json!({"resourceType": "Observation", "status": "final"})
    );
}

#[test]
fn typed_decode_still_checks_embedded_sites() {
    let tree = json!({"contained": [{"resourceType": "Bogus"}]});
    assert!(matches!(
        resolve_as::<CarePlan>(&tree),
        Err(Error::UnrecognizedVariant(_))
    ));

    let tree = json!({"contained": [{"resourceType": "Goal"}, {"id": "x"}]});
    match resolve_as::<CarePlan>(&tree) {
        Err(Error::MissingDiscriminant { location }) => {
            assert_eq!(location, "CarePlan.contained[1]")
        }
        other => panic!("expected a missing discriminant, got {other:?}"),
    }
}

#[test]
fn observation_fixture_round_trips() {
    let tree = load_fixture("observation-vitals.json");
    let observation: Observation = resolve_as(&tree).unwrap();

    let quantity = observation.value.value_quantity.as_ref().unwrap();
    assert_eq!(quantity.unit.as_deref(), Some("lbs"));
    let encoded = serde_json::to_value(&observation).unwrap();
    assert_eq!(encoded, tree);

    let low = &encoded["referenceRange"][0]["low"]["value"];
    assert!(low.is_i64(), "whole decimal written as {low}");
}

#[test]
fn resolution_leaves_the_input_untouched() {
    let tree = load_fixture("careplan-contained.json");
    let before = tree.clone();
    resolve(&tree, true).unwrap();
    assert_eq!(tree, before);
}
