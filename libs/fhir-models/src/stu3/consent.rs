//! FHIR Consent model

use crate::common::{
    BackboneElement, CodeableConcept, Coding, FhirDateTime, Identifier, Period, Reference,
};
use crate::resource::{Discriminant, DomainResource};
use serde::{Deserialize, Serialize};

/// A healthcare consumer's policy choices to permit or deny recipients or
/// roles to perform actions for specific purposes and periods of time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consent {
    #[serde(default)]
    pub resource_type: Discriminant<Consent>,

    #[serde(flatten)]
    pub base: DomainResource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// draft | proposed | active | rejected | inactive | entered-in-error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<CodeableConcept>,

    /// Who the consent applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// When this Consent was created or indexed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<FhirDateTime>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consenting_party: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actor: Vec<ConsentActor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action: Vec<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organization: Vec<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_identifier: Option<Identifier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_reference: Option<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policy: Vec<ConsentPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_rule: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_label: Vec<Coding>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub purpose: Vec<Coding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_period: Option<Period>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<ConsentData>,

    /// Additional rules - positive or negative
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub except: Vec<ConsentExcept>,
}

/// Who or what is controlled by this consent, or an exception to it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentActor {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentPolicy {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Data controlled by this consent, or by an exception
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentData {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    /// instance | related | dependents | authoredby
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentExcept {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    /// deny | permit
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub except_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actor: Vec<ConsentActor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action: Vec<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_label: Vec<Coding>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub purpose: Vec<Coding>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class: Vec<Coding>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code: Vec<Coding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_period: Option<Period>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<ConsentData>,
}

impl Consent {
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("active")
    }

    /// Whether any exception denies something
    pub fn has_denials(&self) -> bool {
        self.except
            .iter()
            .any(|e| e.except_type.as_deref() == Some("deny"))
    }
}
