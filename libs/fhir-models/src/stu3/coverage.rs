//! FHIR Coverage model

use crate::common::{BackboneElement, CodeableConcept, Identifier, Period, Reference};
use crate::resource::{Discriminant, DomainResource};
use serde::{Deserialize, Serialize};

/// Insurance or medical plan or a payment agreement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    #[serde(default)]
    pub resource_type: Discriminant<Coverage>,

    #[serde(flatten)]
    pub base: DomainResource,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    /// active | cancelled | draft | entered-in-error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub coverage_type: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_holder: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_id: Option<String>,

    /// Plan beneficiary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payor: Vec<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<CoverageGrouping>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,

    /// Relative order of the coverage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contract: Vec<Reference>,
}

/// Additional coverage classifications
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageGrouping {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_display: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_group_display: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_display: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_plan: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_plan_display: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_display: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_class_display: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_part_a_coverage() {
        let json = json!({
            "resourceType": "Coverage",
            "id": "part-a-20140000008325",
            "status": "active",
            "type": {"coding": [{"system": "Medicare", "code": "Part A"}]},
            "beneficiary": {"reference": "Patient/20140000008325"},
            "grouping": {"subGroup": "Medicare", "subPlan": "Part A"},
            "order": 1
        });

        let coverage: Coverage = serde_json::from_value(json.clone()).unwrap();
        assert!(coverage.coverage_type.as_ref().unwrap().has_coding("Medicare", "Part A"));
        assert_eq!(
            coverage.grouping.as_ref().unwrap().sub_plan.as_deref(),
            Some("Part A")
        );
        assert_eq!(serde_json::to_value(&coverage).unwrap(), json);
    }
}
