//! Human-readable outline of a resolved resource tree

use vellum_models::stu3::Bundle;
use vellum_models::Resource;

/// One line per resource, indented by embedding depth, each embedded
/// resource prefixed with its location. Bundle entries also list their
/// request and response summaries.
pub fn render(resource: &Resource) -> String {
    let mut out = String::new();
    push_resource(&mut out, resource, None, 0);
    out
}

fn push_resource(out: &mut String, resource: &Resource, location: Option<&str>, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    if let Some(location) = location {
        out.push_str(&format!("{}: ", location));
    }
    out.push_str(resource.resource_type().as_str());
    if let Some(id) = resource.id() {
        out.push_str(&format!(" (id: {})", id));
    }
    out.push('\n');

    for (child_location, child) in resource.embedded() {
        push_resource(out, child, Some(&child_location), depth + 1);
    }

    if let Some(bundle) = resource.downcast_ref::<Bundle>() {
        push_exchanges(out, bundle, depth + 1);
    }
}

fn push_exchanges(out: &mut String, bundle: &Bundle, depth: usize) {
    let indent = "  ".repeat(depth);
    for (i, entry) in bundle.entries().iter().enumerate() {
        if let Some(request) = &entry.request {
            out.push_str(&format!("{}entry[{}].request: {}\n", indent, i, request));
        }
        if let Some(response) = &entry.response {
            out.push_str(&format!("{}entry[{}].response: {}\n", indent, i, response));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn outlines_nested_resources_and_exchanges() {
        let tree = json!({
            "resourceType": "Bundle",
            "id": "b1",
            "type": "transaction-response",
            "entry": [
                {
                    "resource": {
                        "resourceType": "CarePlan",
                        "id": "cp",
                        "contained": [{"resourceType": "Patient", "id": "p1"}]
                    },
                    "response": {"status": "201 Created", "location": "CarePlan/cp/_history/1"}
                },
                {
                    "request": {"method": "DELETE", "url": "Goal/g9"},
                    "response": {"status": "204 No Content", "outcome": {"resourceType": "OperationOutcome"}}
                }
            ]
        });
        let resource = vellum_models::resolve(&tree, false).unwrap();

        assert_eq!(
            render(&resource),
            "Bundle (id: b1)\n\
             \x20 entry[0].resource: CarePlan (id: cp)\n\
             \x20   contained[0]: Patient (id: p1)\n\
             \x20 entry[1].response.outcome: OperationOutcome\n\
             \x20 entry[0].response: 201 Created | Location: CarePlan/cp/_history/1\n\
             \x20 entry[1].request: DELETE Goal/g9\n\
             \x20 entry[1].response: 204 No Content | Outcome: OperationOutcome\n"
        );
    }
}
