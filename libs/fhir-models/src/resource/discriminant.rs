//! The `resourceType` guard carried by every resource struct

use super::{ResourceType, ResourceVariant};
use crate::Error;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Zero-sized `resourceType` field of variant `T`.
///
/// Serializes as `T`'s canonical name. Deserializing accepts the canonical
/// name, or nothing at all (absent, `null` or `""`, in which case the name is
/// implied); any other name is a [`Error::DiscriminantMismatch`]. Because the
/// field holds no data it can never disagree with the struct it lives in.
pub struct Discriminant<T> {
    _variant: PhantomData<fn() -> T>,
}

impl<T: ResourceVariant> Discriminant<T> {
    pub fn new() -> Self {
        Self {
            _variant: PhantomData,
        }
    }

    pub fn resource_type(&self) -> ResourceType {
        T::RESOURCE_TYPE
    }

    pub fn name(&self) -> &'static str {
        T::RESOURCE_TYPE.as_str()
    }
}

impl<T: ResourceVariant> Default for Discriminant<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Discriminant<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Discriminant<T> {}

impl<T> PartialEq for Discriminant<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for Discriminant<T> {}

impl<T: ResourceVariant> fmt::Debug for Discriminant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Discriminant({})", self.name())
    }
}

impl<T: ResourceVariant> Serialize for Discriminant<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de, T: ResourceVariant> Deserialize<'de> for Discriminant<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(found) if !found.is_empty() && found != T::RESOURCE_TYPE.as_str() => {
                Err(de::Error::custom(Error::DiscriminantMismatch {
                    expected: T::RESOURCE_TYPE,
                    found,
                }))
            }
            _ => Ok(Self::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stu3::Patient;
    use serde_json::json;

    #[test]
    fn serializes_canonical_name() {
        let tag = Discriminant::<Patient>::new();
        assert_eq!(serde_json::to_value(tag).unwrap(), json!("Patient"));
        assert_eq!(tag.resource_type(), ResourceType::Patient);
    }

    #[test]
    fn accepts_matching_or_absent_name() {
        for value in [json!("Patient"), json!(null), json!("")] {
            let tag: Discriminant<Patient> = serde_json::from_value(value).unwrap();
            assert_eq!(tag.name(), "Patient");
        }
    }

    #[test]
    fn rejects_other_names() {
        let err = serde_json::from_value::<Discriminant<Patient>>(json!("Bundle")).unwrap_err();
        assert!(err
            .to_string()
            .contains("Expected resourceType to be Patient, instead received Bundle"));
    }
}
