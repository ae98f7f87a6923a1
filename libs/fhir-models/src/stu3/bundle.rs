//! FHIR Bundle model
//!
//! A Bundle embeds resources of any kind in two places: `entry.resource` and
//! `entry.response.outcome`. Both are typed [`Resource`] slots.

use crate::common::{BackboneElement, FhirDateTime, Identifier};
use crate::resource::{Discriminant, Resource, ResourceBase};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// FHIR Bundle resource
///
/// A container for a collection of resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// Resource type - always "Bundle"
    #[serde(default)]
    pub resource_type: Discriminant<Bundle>,

    #[serde(flatten)]
    pub base: ResourceBase,

    /// Persistent identifier for the bundle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Indicates the purpose of this bundle - how it was intended to be used
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub bundle_type: Option<BundleType>,

    /// If search, the total number of matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,

    /// Links related to this Bundle
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<BundleLink>,

    /// Entry in the bundle - will have a resource or information
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<BundleEntry>,

    /// Digital Signature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<Value>,
}

/// Type of Bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BundleType {
    /// Document Bundle - A set of resources composing a single coherent document
    Document,
    /// Message Bundle - A message (application/response or application/request)
    Message,
    /// Transaction Bundle - A transaction - intended to be processed atomically
    Transaction,
    /// Transaction Response Bundle - Response to a transaction
    TransactionResponse,
    /// Batch Bundle - A set of resources collected for a specific purpose
    Batch,
    /// Batch Response Bundle - Response to a batch
    BatchResponse,
    /// History Bundle - A list of resources with history
    History,
    /// Search Results Bundle - Results of a search operation
    Searchset,
    /// Collection Bundle - A set of resources collected for a specific purpose
    Collection,
}

/// Links related to this Bundle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleLink {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    /// See http://www.iana.org/assignments/link-relations/link-relations.xhtml#link-relations-1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,

    /// Reference details for the link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Entry in the bundle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    /// Links related to this entry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<BundleLink>,

    /// Full URL for the entry (relative to the base URL, or absolute)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    /// A resource in this bundle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,

    /// Search-related information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<BundleEntrySearch>,

    /// Additional execution information (transaction/batch/history)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<BundleEntryRequest>,

    /// Results of execution (transaction/batch/history)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<BundleEntryResponse>,
}

/// Search-related information for a Bundle entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntrySearch {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    /// Why this entry is in the result set: a direct match or an `_include`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<BundleEntrySearchMode>,

    /// Search ranking (between 0 and 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Why an entry is in the result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleEntrySearchMode {
    /// This resource matched the search specification
    Match,
    /// This resource is returned because it is referred to from another resource in the search set
    Include,
    /// An OperationOutcome providing additional information about the processing of a search entry
    Outcome,
}

/// HTTP verb of a transaction or batch entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Delete => "DELETE",
        }
    }
}

/// Request details for a Bundle entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntryRequest {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    /// HTTP verb for the entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpVerb>,

    /// URL for HTTP equivalent of this entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// For managing cache currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_none_match: Option<String>,

    /// For managing cache currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_modified_since: Option<FhirDateTime>,

    /// For managing update contention
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,

    /// For conditional creates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_none_exist: Option<String>,
}

/// Response details for a Bundle entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntryResponse {
    #[serde(flatten)]
    pub backbone: BackboneElement,

    /// Status response code (text optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// The location (if the operation returns a location)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// The Etag for the resource (if relevant)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// Server's date time modified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<FhirDateTime>,

    /// OperationOutcome (or any resource) with hints and warnings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Resource>,
}

impl Bundle {
    /// Create a new Bundle of the given type
    pub fn new(bundle_type: BundleType) -> Self {
        Self {
            bundle_type: Some(bundle_type),
            ..Default::default()
        }
    }

    /// Check if this is a transaction bundle
    pub fn is_transaction(&self) -> bool {
        self.bundle_type == Some(BundleType::Transaction)
    }

    /// Check if this is a batch bundle
    pub fn is_batch(&self) -> bool {
        self.bundle_type == Some(BundleType::Batch)
    }

    /// Check if this is a search result bundle
    pub fn is_searchset(&self) -> bool {
        self.bundle_type == Some(BundleType::Searchset)
    }

    /// Get the number of entries in the bundle
    pub fn entry_count(&self) -> usize {
        self.entry.len()
    }

    pub fn entries(&self) -> &[BundleEntry] {
        &self.entry
    }

    /// Resources carried by the entries, in entry order
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.entry.iter().filter_map(|e| e.resource.as_ref())
    }

    /// Add an entry to the bundle
    pub fn add_entry(&mut self, entry: BundleEntry) {
        self.entry.push(entry);
    }

    /// Add a link to the bundle
    pub fn add_link(&mut self, relation: impl Into<String>, url: impl Into<String>) {
        self.link.push(BundleLink {
            relation: Some(relation.into()),
            url: Some(url.into()),
            ..Default::default()
        });
    }
}

impl BundleEntry {
    pub fn with_resource(resource: Resource) -> Self {
        Self {
            resource: Some(resource),
            ..Default::default()
        }
    }
}

impl BundleEntryRequest {
    pub fn new(method: HttpVerb, url: impl Into<String>) -> Self {
        Self {
            method: Some(method),
            url: Some(url.into()),
            ..Default::default()
        }
    }
}

impl fmt::Display for BundleEntryRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = self.method.as_ref().map(HttpVerb::as_str).unwrap_or_default();
        write!(f, "{} {}", method, self.url.as_deref().unwrap_or_default())?;
        if let Some(tag) = &self.if_none_match {
            write!(f, " | If-None-Match: {}", tag)?;
        }
        if let Some(since) = &self.if_modified_since {
            write!(f, " | If-Modified-Since: {}", http_date(since))?;
        }
        if let Some(tag) = &self.if_match {
            write!(f, " | If-Match: {}", tag)?;
        }
        if let Some(query) = &self.if_none_exist {
            write!(f, " | If-None-Exist: {}", query)?;
        }
        Ok(())
    }
}

impl fmt::Display for BundleEntryResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status.as_deref().unwrap_or_default())?;
        if let Some(location) = &self.location {
            write!(f, " | Location: {}", location)?;
        }
        if let Some(etag) = &self.etag {
            write!(f, " | Etag: {}", etag)?;
        }
        if let Some(modified) = &self.last_modified {
            write!(f, " | Last-Modified: {}", http_date(modified))?;
        }
        if let Some(outcome) = &self.outcome {
            write!(f, " | Outcome: {}", outcome.resource_type())?;
        }
        Ok(())
    }
}

fn http_date(value: &FhirDateTime) -> String {
    value.to_http_date().unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ResourceType;
    use crate::stu3::{OperationOutcome, Patient};
    use serde_json::json;

    #[test]
    fn test_deserialize_bundle() {
        let json = json!({
            "resourceType": "Bundle",
            "id": "example-bundle",
            "type": "searchset",
            "total": 1,
            "entry": [
                {
                    "fullUrl": "http://example.org/fhir/Patient/123",
                    "resource": {
                        "resourceType": "Patient",
                        "id": "123"
                    },
                    "search": {
                        "mode": "match",
                        "score": 1.0
                    }
                }
            ]
        });

        let bundle: Bundle = serde_json::from_value(json).unwrap();
        assert_eq!(bundle.base.id, Some("example-bundle".to_string()));
        assert_eq!(bundle.bundle_type, Some(BundleType::Searchset));
        assert_eq!(bundle.total, Some(1));
        assert_eq!(bundle.entry_count(), 1);

        let resource = bundle.resources().next().unwrap();
        assert_eq!(resource.resource_type(), ResourceType::Patient);
        assert_eq!(resource.id(), Some("123"));
    }

    #[test]
    fn test_serialize_bundle() {
        let bundle = Bundle::new(BundleType::Transaction);
        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json, json!({"resourceType": "Bundle", "type": "transaction"}));
    }

    #[test]
    fn test_bundle_type_predicates() {
        let bundle = Bundle::new(BundleType::Transaction);
        assert!(bundle.is_transaction());
        assert!(!bundle.is_batch());
        assert!(Bundle::new(BundleType::Batch).is_batch());
        assert!(Bundle::new(BundleType::Searchset).is_searchset());
        assert!(!Bundle::default().is_searchset());
    }

    #[test]
    fn test_add_entry_and_link() {
        let mut bundle = Bundle::new(BundleType::Searchset);
        bundle.add_entry(BundleEntry::with_resource(Patient::default().into()));
        bundle.add_link("self", "http://example.org/fhir/Patient?_id=123");

        assert_eq!(bundle.entry_count(), 1);
        assert_eq!(bundle.link.len(), 1);
        assert_eq!(bundle.entries().len(), 1);
        assert_eq!(bundle.link[0].relation.as_deref(), Some("self"));
    }

    #[test]
    fn test_unknown_bundle_type_is_rejected() {
        let err =
            serde_json::from_value::<Bundle>(json!({"resourceType": "Bundle", "type": "pile"}));
        assert!(err.is_err());
    }

    #[test]
    fn test_request_display() {
        let mut request = BundleEntryRequest::new(HttpVerb::Put, "Patient/123");
        request.if_match = Some("W/\"2\"".to_string());
        request.if_modified_since = Some("2015-10-21T07:28:00-07:00".parse().unwrap());
        request.if_none_exist = Some("identifier=http://acme.org/mrns|12345".to_string());

        assert_eq!(
            request.to_string(),
            "PUT Patient/123 | If-Modified-Since: Wed, 21 Oct 2015 14:28:00 GMT \
             | If-Match: W/\"2\" | If-None-Exist: identifier=http://acme.org/mrns|12345"
        );
    }

    #[test]
    fn test_response_display() {
        let response = BundleEntryResponse {
            status: Some("201 Created".to_string()),
            location: Some("Patient/123/_history/1".to_string()),
            etag: Some("W/\"1\"".to_string()),
            last_modified: Some("2023-01-01".parse().unwrap()),
            outcome: Some(OperationOutcome::default().into()),
            ..Default::default()
        };

        assert_eq!(
            response.to_string(),
            "201 Created | Location: Patient/123/_history/1 | Etag: W/\"1\" \
             | Last-Modified: Sun, 01 Jan 2023 00:00:00 GMT | Outcome: OperationOutcome"
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "201 Created");
        assert_eq!(json["outcome"]["resourceType"], "OperationOutcome");
    }
}
