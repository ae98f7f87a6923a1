//! FHIR data models with polymorphic resource resolution
//!
//! This crate provides strongly-typed Rust structures for FHIR resources and
//! the resolver that turns a loosely-typed document into one of them.
//!
//! # Module Organization
//!
//! - `common`: Version-agnostic datatypes, date/time values and errors
//! - `resource`: The closed [`Resource`] sum type, the variant table and the
//!   `resourceType` guard every resource struct carries
//! - `resolver`: Discriminant-driven resolution of a generic tree
//! - `stu3`: Resource structs (a representative subset of FHIR STU3)
//!
//! # Design Philosophy
//!
//! - **Closed set**: a `resourceType` outside [`ResourceType::ALL`] is an
//!   error, never a fallback shape
//! - **Composition**: shared prefixes (`ResourceBase`, `DomainResource`,
//!   `BackboneElement`) are named, flattened fields
//! - **Format-agnostic**: resolution works on `serde_json::Value`; other
//!   formats convert to and from that tree
//!
//! # Example
//!
//! ```rust
//! use vellum_models::{resolve, stu3::Patient, ResourceType};
//! use serde_json::json;
//!
//! let tree = json!({
//!     "resourceType": "Bundle",
//!     "type": "collection",
//!     "entry": [{"resource": {"resourceType": "Patient", "gender": "male"}}]
//! });
//!
//! let bundle = resolve(&tree, false).unwrap();
//! assert_eq!(bundle.resource_type(), ResourceType::Bundle);
//!
//! let (location, patient) = &bundle.embedded()[0];
//! assert_eq!(location, "entry[0].resource");
//! assert!(patient.downcast_ref::<Patient>().is_some());
//! ```

pub mod common;
pub mod resolver;
pub mod resource;
pub mod stu3;

pub use common::{Error, Result};
pub use resolver::{resolve, resolve_as, RESOURCE_TYPE_KEY};
pub use resource::{
    Discriminant, DomainResource, Resource, ResourceBase, ResourceType, ResourceVariant,
};
