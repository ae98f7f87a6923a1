//! FHIR Patient model

use crate::common::{
    Address, BackboneElement, CodeableConcept, ContactPoint, FhirDateTime, HumanName, Identifier,
    Period, Reference,
};
use crate::resource::{Discriminant, DomainResource};
use serde::{Deserialize, Serialize};

/// Demographics and other administrative information about an individual
/// receiving care
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Resource type - always "Patient"
    #[serde(default)]
    pub resource_type: Discriminant<Patient>,

    #[serde(flatten)]
    pub base: DomainResource,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    /// Whether this patient's record is in active use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<HumanName>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telecom: Vec<ContactPoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<AdministrativeGender>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<FhirDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deceased_boolean: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deceased_date_time: Option<FhirDateTime>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_birth_boolean: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_birth_integer: Option<i32>,

    /// A contact party (e.g. guardian, partner, friend) for the patient
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<PatientContact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal: Option<PatientAnimal>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub communication: Vec<PatientCommunication>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub general_practitioner: Vec<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub managing_organization: Option<Reference>,

    /// Link to another patient resource that concerns the same actual person
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<PatientLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdministrativeGender {
    Male,
    Female,
    Other,
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientContact {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationship: Vec<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<HumanName>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telecom: Vec<ContactPoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<AdministrativeGender>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientAnimal {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_status: Option<CodeableConcept>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientCommunication {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientLink {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<Reference>,

    /// replaced-by | replaces | refer | seealso
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

impl Patient {
    /// Whether the patient is recorded as deceased, either as a flag or a date
    pub fn is_deceased(&self) -> bool {
        self.deceased_boolean.unwrap_or(false) || self.deceased_date_time.is_some()
    }

    /// Value of the first identifier issued by `system`
    pub fn identifier_value(&self, system: &str) -> Option<&str> {
        self.identifier
            .iter()
            .find(|i| i.system.as_deref() == Some(system))
            .and_then(|i| i.value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Precision;
    use serde_json::json;

    #[test]
    fn test_deserialize_patient() {
        let json = json!({
            "resourceType": "Patient",
            "id": "example",
            "identifier": [{"system": "http://hl7.org/fhir/sid/us-mbi", "value": "1S00E00AA00"}],
            "name": [{"family": "Chalmers", "given": ["Peter", "James"]}],
            "gender": "male",
            "birthDate": "1974-12",
            "deceasedBoolean": false,
            "contact": [{"gender": "female", "relationship": [{"text": "next of kin"}]}],
            "link": [{"other": {"reference": "Patient/pat2"}, "type": "seealso"}]
        });

        let patient: Patient = serde_json::from_value(json).unwrap();
        assert_eq!(patient.base.resource.id.as_deref(), Some("example"));
        assert_eq!(patient.gender, Some(AdministrativeGender::Male));
        assert_eq!(patient.name[0].given, ["Peter", "James"]);
        assert_eq!(patient.birth_date.unwrap().precision(), Precision::YearMonth);
        assert_eq!(patient.contact[0].gender, Some(AdministrativeGender::Female));
        assert_eq!(patient.link[0].link_type.as_deref(), Some("seealso"));
        assert_eq!(
            patient.identifier_value("http://hl7.org/fhir/sid/us-mbi"),
            Some("1S00E00AA00")
        );
        assert!(!patient.is_deceased());
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let patient = Patient {
            active: Some(true),
            deceased_date_time: Some("2015-02-14T13:42:00+10:00".parse().unwrap()),
            ..Default::default()
        };

        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(
            json,
            json!({
                "resourceType": "Patient",
                "active": true,
                "deceasedDateTime": "2015-02-14T13:42:00+10:00"
            })
        );
        assert!(patient.is_deceased());
    }

    #[test]
    fn test_unknown_gender_code_is_rejected() {
        let err = serde_json::from_value::<Patient>(json!({"gender": "robot"}));
        assert!(err.is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let patient: Patient =
            serde_json::from_value(json!({"resourceType": "Patient", "photo": [{}]})).unwrap();
        assert_eq!(patient, Patient::default());
    }
}
