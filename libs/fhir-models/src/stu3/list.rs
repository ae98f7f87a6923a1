//! FHIR List model

use crate::common::{
    Annotation, BackboneElement, CodeableConcept, FhirDateTime, Identifier, Reference,
};
use crate::resource::{Discriminant, DomainResource};
use serde::{Deserialize, Serialize};

/// A curated collection of references to resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    #[serde(default)]
    pub resource_type: Discriminant<List>,

    #[serde(flatten)]
    pub base: DomainResource,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    /// current | retired | entered-in-error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// working | snapshot | changes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<FhirDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered_by: Option<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<Annotation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<ListEntry>,

    /// Why list is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_reason: Option<CodeableConcept>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<CodeableConcept>,

    /// If this item is actually marked as deleted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<FhirDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Reference>,
}

impl List {
    /// References of entries not marked as deleted
    pub fn items(&self) -> impl Iterator<Item = &Reference> {
        self.entry
            .iter()
            .filter(|e| !e.deleted.unwrap_or(false))
            .filter_map(|e| e.item.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_skip_deleted_entries() {
        let list: List = serde_json::from_value(json!({
            "resourceType": "List",
            "status": "current",
            "mode": "changes",
            "entry": [
                {"item": {"reference": "Patient/a"}},
                {"item": {"reference": "Patient/b"}, "deleted": true},
                {"flag": {"text": "no item"}}
            ]
        }))
        .unwrap();

        let items: Vec<_> = list.items().filter_map(|r| r.reference.as_deref()).collect();
        assert_eq!(items, ["Patient/a"]);
    }
}
