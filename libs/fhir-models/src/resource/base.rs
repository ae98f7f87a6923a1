//! Shared prefixes composed into every resource struct

use super::Resource;
use crate::common::{Extension, Meta, Narrative};
use serde::{Deserialize, Serialize};

/// Fields common to all resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceBase {
    /// Logical id of this artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Fields common to resources with narrative, contained resources and
/// extensions (everything except `Bundle` in this crate)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResource {
    #[serde(flatten)]
    pub resource: ResourceBase,

    /// Text summary of the resource, for human interpretation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,

    /// Contained, inline resources. Each one is resolved by its own
    /// `resourceType`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contained: Vec<Resource>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,
}

impl DomainResource {
    /// Contained resource with the given id (the target of a `#id` reference)
    pub fn find_contained(&self, id: &str) -> Option<&Resource> {
        self.contained
            .iter()
            .find(|r| r.base().id.as_deref() == Some(id))
    }
}
