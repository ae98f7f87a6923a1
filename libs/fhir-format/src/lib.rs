//! FHIR format adapters for the vellum resource resolver.
//!
//! Resolution itself happens once, on the `serde_json::Value` tree, in
//! [`vellum_models::resolve`]. Each serialization only needs a [`Codec`]
//! that turns its native container into that tree and back:
//! - [`Json`]: the container is the tree.
//! - [`Bson`]: a [`bson::Document`], converted element by element. Stored
//!   date ranges and BSON `DateTime` values come back as date strings.
//!
//! ```rust
//! use vellum_format::{convert, decode, Bson, Json};
//! use vellum_models::ResourceType;
//!
//! let json = br#"{"resourceType": "Patient", "gender": "female"}"#;
//! let bytes = convert::<Json, Bson>(json).unwrap();
//! let patient = decode::<Bson>(&bytes).unwrap();
//! assert_eq!(patient.resource_type(), ResourceType::Patient);
//! ```

mod bson_tree;
mod codec;
mod error;
mod format;

pub use bson_tree::{document_to_tree, tree_to_document, STR_DATE_KEY};
pub use codec::{Bson, Codec, Json};
pub use error::{FormatError, Result};
pub use format::Format;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use vellum_models::{Resource, ResourceVariant};

/// Resolve a native container into a typed resource
pub fn resolve<C: Codec>(
    container: &C::Container,
    allow_missing_discriminant: bool,
) -> Result<Resource> {
    let tree = C::to_tree(container)?;
    let resource = vellum_models::resolve(&tree, allow_missing_discriminant)?;
    tracing::trace!(format = C::NAME, resource_type = %resource.resource_type(), "resolved");
    Ok(resource)
}

pub fn resolve_json(value: &Value, allow_missing_discriminant: bool) -> Result<Resource> {
    resolve::<Json>(value, allow_missing_discriminant)
}

pub fn resolve_bson(doc: &bson::Document, allow_missing_discriminant: bool) -> Result<Resource> {
    resolve::<Bson>(doc, allow_missing_discriminant)
}

/// Read and resolve a top-level resource; a missing `resourceType` is an error
pub fn decode<C: Codec>(bytes: &[u8]) -> Result<Resource> {
    let container = C::read(bytes)?;
    resolve::<C>(&container, false)
}

/// Read bytes expected to hold variant `T`
pub fn decode_as<C, T>(bytes: &[u8]) -> Result<T>
where
    C: Codec,
    T: ResourceVariant + DeserializeOwned,
{
    let container = C::read(bytes)?;
    let tree = C::to_tree(&container)?;
    Ok(vellum_models::resolve_as(&tree)?)
}

pub fn to_container<C: Codec>(resource: &Resource) -> Result<C::Container> {
    C::from_tree(serde_json::to_value(resource)?)
}

pub fn encode<C: Codec>(resource: &Resource) -> Result<Vec<u8>> {
    C::write(&to_container::<C>(resource)?)
}

pub fn encode_variant<C, T>(variant: &T) -> Result<Vec<u8>>
where
    C: Codec,
    T: ResourceVariant + Serialize,
{
    C::write(&C::from_tree(serde_json::to_value(variant)?)?)
}

/// Decode with `I`, re-encode with `O`
pub fn convert<I: Codec, O: Codec>(bytes: &[u8]) -> Result<Vec<u8>> {
    let resource = decode::<I>(bytes)?;
    tracing::debug!(
        from = I::NAME,
        to = O::NAME,
        resource_type = %resource.resource_type(),
        "converting"
    );
    encode::<O>(&resource)
}
