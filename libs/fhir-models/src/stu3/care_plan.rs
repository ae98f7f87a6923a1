//! FHIR CarePlan model

use crate::common::{
    Annotation, BackboneElement, CodeableConcept, Identifier, Period, Quantity, Reference,
};
use crate::resource::{Discriminant, DomainResource};
use serde::{Deserialize, Serialize};

/// Healthcare plan for a patient or group
///
/// Care plans frequently carry their subject and goals as contained
/// resources, referenced locally as `#id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlan {
    #[serde(default)]
    pub resource_type: Discriminant<CarePlan>,

    #[serde(flatten)]
    pub base: DomainResource,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub definition: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub based_on: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replaces: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub part_of: Vec<Reference>,

    /// draft | active | suspended | completed | entered-in-error | cancelled | unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// proposal | plan | order | option
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub care_team: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supporting_info: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goal: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activity: Vec<CarePlanActivity>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<Annotation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlanActivity {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcome_codeable_concept: Vec<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcome_reference: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub progress: Vec<Annotation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<CarePlanActivityDetail>,
}

/// In-line definition of an activity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlanActivityDetail {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason_code: Vec<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason_reference: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goal: Vec<Reference>,

    /// not-started | scheduled | in-progress | on-hold | completed | cancelled | unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prohibited: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_period: Option<Period>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_string: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub performer: Vec<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_codeable_concept: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_reference: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_amount: Option<Quantity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CarePlan {
    /// The subject, when it is carried as a contained resource
    pub fn contained_subject(&self) -> Option<&crate::resource::Resource> {
        let id = self.subject.as_ref()?.contained_id()?;
        self.base.find_contained(id)
    }
}
