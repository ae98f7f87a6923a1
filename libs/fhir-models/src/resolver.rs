//! Polymorphic resource resolution
//!
//! Turns a generic tree (`serde_json::Value`, whatever format it was read
//! from) into a typed [`Resource`] by reading `resourceType` and looking it up
//! in the closed variant table.
//!
//! Resolution happens in two steps over the same tree:
//!
//! 1. The discriminant of the root, and of every embedded resource reachable
//!    through an embedding site, is checked depth-first. Failures here carry
//!    the exact location and the typed error (`UnrecognizedVariant`, ...).
//! 2. The whole tree is decoded once into the selected variant struct. Nested
//!    datatypes run their own decoders; embedded slots dispatch through the
//!    same table.
//!
//! The input tree is never modified and no partially decoded resource is
//! ever returned.

use crate::resource::{Resource, ResourceType, ResourceVariant};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Key holding the discriminant in every representation
pub const RESOURCE_TYPE_KEY: &str = "resourceType";

const ROOT: &str = "resource";

/// Paths (relative to a resource of the given type) at which resources of any
/// kind may be embedded. Arrays along a path are traversed element-wise.
fn embedding_sites(resource_type: ResourceType) -> &'static [&'static [&'static str]] {
    match resource_type {
        ResourceType::Bundle => &[&["entry", "resource"], &["entry", "response", "outcome"]],
        _ => &[&["contained"]],
    }
}

/// Resolve `tree` into the variant named by its `resourceType`.
///
/// An absent discriminant can never be resolved: with
/// `allow_missing_discriminant` it is reported as [`Error::UnknownVariant`],
/// otherwise as [`Error::MissingDiscriminant`]. The flag applies to embedded
/// resources too.
pub fn resolve(tree: &Value, allow_missing_discriminant: bool) -> Result<Resource> {
    let resource_type = discriminant(tree, ROOT, allow_missing_discriminant)?;
    let location = resource_type.as_str();
    check_embedded(resource_type, tree, location, allow_missing_discriminant)?;
    decode(resource_type, tree, location)
}

/// Resolve `tree` as the statically expected variant `T`.
///
/// An absent top-level discriminant is implied; one naming any other variant
/// is an [`Error::DiscriminantMismatch`], even when that variant is otherwise
/// valid. Embedded resources carry no static type, so each must name its own
/// variant or the decode fails with [`Error::MissingDiscriminant`].
pub fn resolve_as<T>(tree: &Value) -> Result<T>
where
    T: ResourceVariant + DeserializeOwned,
{
    let expected = T::RESOURCE_TYPE;
    let object = as_object(tree, ROOT)?;
    match object.get(RESOURCE_TYPE_KEY) {
        None | Some(Value::Null) => {}
        Some(Value::String(found)) if found.is_empty() || found == expected.as_str() => {}
        Some(Value::String(found)) => {
            return Err(Error::DiscriminantMismatch {
                expected,
                found: found.clone(),
            })
        }
        Some(other) => return Err(not_a_string(ROOT, other)),
    }

    check_embedded(expected, tree, expected.as_str(), false)?;
    T::deserialize(tree).map_err(|e| malformed(expected.as_str(), e))
}

/// Read and look up the discriminant of one embedded tree, then decode it.
/// Used by `Resource`'s own `Deserialize`, where the embedding resource has
/// already been checked.
pub(crate) fn resolve_shallow(tree: &Value) -> Result<Resource> {
    let resource_type = discriminant(tree, ROOT, true)?;
    decode(resource_type, tree, resource_type.as_str())
}

fn decode(resource_type: ResourceType, tree: &Value, location: &str) -> Result<Resource> {
    Resource::decode_tree(resource_type, tree).map_err(|e| {
        tracing::debug!(resource_type = %resource_type, error = %e, "resource decode failed");
        malformed(location, e)
    })
}

fn discriminant(tree: &Value, location: &str, allow_missing: bool) -> Result<ResourceType> {
    let object = as_object(tree, location)?;
    match object.get(RESOURCE_TYPE_KEY) {
        None | Some(Value::Null) => Err(missing(location, allow_missing)),
        Some(Value::String(name)) if name.is_empty() => Err(missing(location, allow_missing)),
        Some(Value::String(name)) => ResourceType::from_name(name).ok_or_else(|| {
            tracing::debug!(location, resource_type = %name, "unrecognized resource type");
            Error::UnrecognizedVariant(name.clone())
        }),
        Some(other) => Err(not_a_string(location, other)),
    }
}

fn check_embedded(
    resource_type: ResourceType,
    tree: &Value,
    location: &str,
    allow_missing: bool,
) -> Result<()> {
    for site in embedding_sites(resource_type) {
        let mut found = Vec::new();
        collect_at(tree, site, location.to_string(), &mut found);

        for (embedded, embedded_location) in found {
            let embedded_type = discriminant(embedded, &embedded_location, allow_missing)?;
            tracing::trace!(
                location = %embedded_location,
                resource_type = %embedded_type,
                "resolved embedded resource"
            );
            check_embedded(embedded_type, embedded, &embedded_location, allow_missing)?;
        }
    }
    Ok(())
}

/// Collect every value reachable from `node` along `path`. Missing or null
/// steps yield nothing; shape errors are left to the structural decode.
fn collect_at<'a>(
    node: &'a Value,
    path: &[&str],
    location: String,
    found: &mut Vec<(&'a Value, String)>,
) {
    let Some((head, rest)) = path.split_first() else {
        found.push((node, location));
        return;
    };

    match node.get(head) {
        None | Some(Value::Null) => {}
        Some(Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                collect_at(item, rest, format!("{}.{}[{}]", location, head, i), found);
            }
        }
        Some(child) => collect_at(child, rest, format!("{}.{}", location, head), found),
    }
}

fn as_object<'a>(tree: &'a Value, location: &str) -> Result<&'a serde_json::Map<String, Value>> {
    tree.as_object().ok_or_else(|| Error::MalformedField {
        location: location.to_string(),
        message: format!("expected an object, found {}", kind_of(tree)),
    })
}

fn missing(location: &str, allow_missing: bool) -> Error {
    let location = location.to_string();
    if allow_missing {
        Error::UnknownVariant { location }
    } else {
        Error::MissingDiscriminant { location }
    }
}

fn not_a_string(location: &str, value: &Value) -> Error {
    Error::MalformedField {
        location: format!("{}.{}", location, RESOURCE_TYPE_KEY),
        message: format!("expected a string, found {}", kind_of(value)),
    }
}

fn malformed(location: &str, err: serde_json::Error) -> Error {
    Error::MalformedField {
        location: location.to_string(),
        message: err.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
