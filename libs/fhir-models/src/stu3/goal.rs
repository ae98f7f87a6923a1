//! FHIR Goal model

use crate::common::{
    Annotation, BackboneElement, CodeableConcept, FhirDateTime, Identifier, Quantity, Reference,
};
use crate::resource::{Discriminant, DomainResource};
use serde::{Deserialize, Serialize};

/// Describes the intended objective(s) for a patient, group or organization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(default)]
    pub resource_type: Discriminant<Goal>,

    #[serde(flatten)]
    pub base: DomainResource,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    /// proposed | accepted | planned | in-progress | on-target | ahead-of-target
    /// | behind-target | sustaining | achieved | on-hold | cancelled
    /// | entered-in-error | rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<FhirDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_codeable_concept: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<GoalTarget>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_date: Option<FhirDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expressed_by: Option<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<Annotation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcome_code: Vec<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcome_reference: Vec<Reference>,
}

/// Target outcome for the goal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTarget {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_quantity: Option<Quantity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_codeable_concept: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<FhirDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_duration: Option<Quantity>,
}
