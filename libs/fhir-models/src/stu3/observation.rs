//! FHIR Observation model

use crate::common::{
    BackboneElement, CodeableConcept, FhirDateTime, Identifier, Period, Quantity, Reference,
};
use crate::resource::{Discriminant, DomainResource};
use serde::{Deserialize, Serialize};

/// Measurements and simple assertions
///
/// `effective[x]` and `value[x]` are choice elements; each allowed type gets
/// its own field and at most one of them is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    #[serde(default)]
    pub resource_type: Discriminant<Observation>,

    #[serde(flatten)]
    pub base: DomainResource,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub based_on: Vec<Reference>,

    /// registered | preliminary | final | amended | corrected | cancelled
    /// | entered-in-error | unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<CodeableConcept>,

    /// Type of observation (code / type)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date_time: Option<FhirDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_period: Option<Period>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<FhirDateTime>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub performer: Vec<Reference>,

    #[serde(flatten)]
    pub value: ObservationValue,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_absent_reason: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub specimen: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_range: Vec<ObservationReferenceRange>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<ObservationRelated>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub component: Vec<ObservationComponent>,
}

/// The `value[x]` choice shared by an observation and its components
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_quantity: Option<Quantity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_codeable_concept: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_boolean: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_time: Option<FhirDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_date_time: Option<FhirDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_period: Option<Period>,
}

/// Provides guide for interpretation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationReferenceRange {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Quantity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Quantity>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub range_type: Option<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applies_to: Vec<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Resource related to this observation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationRelated {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    /// has-member | derived-from | sequel-to | replaces | qualified-by | interfered-by
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub related_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Reference>,
}

/// Component results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationComponent {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    #[serde(flatten)]
    pub value: ObservationValue,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_absent_reason: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_range: Vec<ObservationReferenceRange>,
}

impl Observation {
    /// Component with a coding matching `system` and `code`
    pub fn component(&self, system: &str, code: &str) -> Option<&ObservationComponent> {
        self.component.iter().find(|c| {
            c.code
                .as_ref()
                .is_some_and(|cc| cc.has_coding(system, code))
        })
    }
}
