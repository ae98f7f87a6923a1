//! FHIR Basic model

use crate::common::{CodeableConcept, FhirDateTime, Identifier, Reference};
use crate::resource::{Discriminant, DomainResource};
use serde::{Deserialize, Serialize};

/// Resource for non-supported content, described entirely by extensions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basic {
    #[serde(default)]
    pub resource_type: Discriminant<Basic>,

    #[serde(flatten)]
    pub base: DomainResource,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    /// Kind of resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<FhirDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Reference>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extensions_survive() {
        let json = json!({
            "resourceType": "Basic",
            "code": {"coding": [{"system": "http://hl7.org/fhir/basic-resource-type", "code": "referral"}]},
            "extension": [{"url": "http://example.org/do-not-use/fhir-extensions/referral#requestingPractitioner", "valueReference": {"reference": "Practitioner/f201"}}],
            "created": "2013-05-14"
        });

        let basic: Basic = serde_json::from_value(json.clone()).unwrap();
        assert!(basic
            .code
            .as_ref()
            .unwrap()
            .has_coding("http://hl7.org/fhir/basic-resource-type", "referral"));
        assert_eq!(basic.base.extension.len(), 1);
        assert_eq!(serde_json::to_value(&basic).unwrap(), json);
    }
}
