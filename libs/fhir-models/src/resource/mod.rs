//! Resources as a closed sum type
//!
//! [`Resource`] is the type of every slot that can hold a resource of any
//! kind (contained resources, bundle entries, bundle entry outcomes). Its
//! `Deserialize` implementation reads `resourceType` and decodes into the
//! matching variant struct; its `Serialize` implementation delegates to the
//! variant, which writes its own `resourceType`.

mod base;
mod discriminant;
mod resource_type;

pub use base::{DomainResource, ResourceBase};
pub use discriminant::Discriminant;
pub use resource_type::ResourceType;

use crate::resolver;
use crate::stu3::{
    Basic, Bundle, CarePlan, Consent, Coverage, Goal, List, Observation, OperationOutcome,
    Patient,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Implemented by every resource struct
pub trait ResourceVariant: Sized {
    const RESOURCE_TYPE: ResourceType;

    fn base(&self) -> &ResourceBase;

    /// `None` for variants that do not compose [`DomainResource`]
    fn domain(&self) -> Option<&DomainResource>;

    fn into_resource(self) -> Resource;

    /// Unwrap `resource` if it holds this variant, otherwise hand it back
    fn from_resource(resource: Resource) -> Result<Self, Resource>;

    fn from_resource_ref(resource: &Resource) -> Option<&Self>;
}

/// A resource of any kind in [`ResourceType::ALL`]
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Basic(Box<Basic>),
    Bundle(Box<Bundle>),
    CarePlan(Box<CarePlan>),
    Consent(Box<Consent>),
    Coverage(Box<Coverage>),
    Goal(Box<Goal>),
    List(Box<List>),
    Observation(Box<Observation>),
    OperationOutcome(Box<OperationOutcome>),
    Patient(Box<Patient>),
}

/// `match` over every variant, binding the boxed struct to `$inner`
macro_rules! each_variant {
    ($resource:expr, $inner:ident => $body:expr) => {
        match $resource {
            Resource::Basic($inner) => $body,
            Resource::Bundle($inner) => $body,
            Resource::CarePlan($inner) => $body,
            Resource::Consent($inner) => $body,
            Resource::Coverage($inner) => $body,
            Resource::Goal($inner) => $body,
            Resource::List($inner) => $body,
            Resource::Observation($inner) => $body,
            Resource::OperationOutcome($inner) => $body,
            Resource::Patient($inner) => $body,
        }
    };
}

macro_rules! impl_resource_variant {
    (@conversions $variant:ident) => {
        fn into_resource(self) -> Resource {
            Resource::$variant(Box::new(self))
        }

        fn from_resource(resource: Resource) -> Result<Self, Resource> {
            match resource {
                Resource::$variant(inner) => Ok(*inner),
                other => Err(other),
            }
        }

        fn from_resource_ref(resource: &Resource) -> Option<&Self> {
            match resource {
                Resource::$variant(inner) => Some(inner.as_ref()),
                _ => None,
            }
        }
    };

    ($variant:ident: DomainResource) => {
        impl ResourceVariant for $variant {
            const RESOURCE_TYPE: ResourceType = ResourceType::$variant;

            fn base(&self) -> &ResourceBase {
                &self.base.resource
            }

            fn domain(&self) -> Option<&DomainResource> {
                Some(&self.base)
            }

            impl_resource_variant!(@conversions $variant);
        }

        impl From<$variant> for Resource {
            fn from(variant: $variant) -> Self {
                variant.into_resource()
            }
        }
    };

    ($variant:ident: ResourceBase) => {
        impl ResourceVariant for $variant {
            const RESOURCE_TYPE: ResourceType = ResourceType::$variant;

            fn base(&self) -> &ResourceBase {
                &self.base
            }

            fn domain(&self) -> Option<&DomainResource> {
                None
            }

            impl_resource_variant!(@conversions $variant);
        }

        impl From<$variant> for Resource {
            fn from(variant: $variant) -> Self {
                variant.into_resource()
            }
        }
    };
}

impl_resource_variant!(Basic: DomainResource);
impl_resource_variant!(Bundle: ResourceBase);
impl_resource_variant!(CarePlan: DomainResource);
impl_resource_variant!(Consent: DomainResource);
impl_resource_variant!(Coverage: DomainResource);
impl_resource_variant!(Goal: DomainResource);
impl_resource_variant!(List: DomainResource);
impl_resource_variant!(Observation: DomainResource);
impl_resource_variant!(OperationOutcome: DomainResource);
impl_resource_variant!(Patient: DomainResource);

impl Resource {
    pub fn resource_type(&self) -> ResourceType {
        each_variant!(self, inner => inner.resource_type.resource_type())
    }

    pub fn base(&self) -> &ResourceBase {
        each_variant!(self, inner => inner.base())
    }

    pub fn domain(&self) -> Option<&DomainResource> {
        each_variant!(self, inner => inner.domain())
    }

    pub fn id(&self) -> Option<&str> {
        self.base().id.as_deref()
    }

    /// Contained resources; always empty for `Bundle`
    pub fn contained(&self) -> &[Resource] {
        self.domain().map(|d| d.contained.as_slice()).unwrap_or(&[])
    }

    pub fn downcast_ref<T: ResourceVariant>(&self) -> Option<&T> {
        T::from_resource_ref(self)
    }

    pub fn into_variant<T: ResourceVariant>(self) -> Result<T, Resource> {
        T::from_resource(self)
    }

    /// Every resource embedded directly in this one, labelled with its
    /// location relative to this resource (`contained[0]`,
    /// `entry[2].resource`, `entry[2].response.outcome`)
    pub fn embedded(&self) -> Vec<(String, &Resource)> {
        let mut embedded: Vec<(String, &Resource)> = self
            .contained()
            .iter()
            .enumerate()
            .map(|(i, r)| (format!("contained[{}]", i), r))
            .collect();

        if let Resource::Bundle(bundle) = self {
            for (i, entry) in bundle.entry.iter().enumerate() {
                if let Some(resource) = &entry.resource {
                    embedded.push((format!("entry[{}].resource", i), resource));
                }
                if let Some(outcome) = entry.response.as_ref().and_then(|r| r.outcome.as_ref()) {
                    embedded.push((format!("entry[{}].response.outcome", i), outcome));
                }
            }
        }

        embedded
    }

    /// Structural decode of `tree` into the struct for `resource_type`
    pub(crate) fn decode_tree(
        resource_type: ResourceType,
        tree: &Value,
    ) -> serde_json::Result<Self> {
        Ok(match resource_type {
            ResourceType::Basic => Basic::deserialize(tree)?.into(),
            ResourceType::Bundle => Bundle::deserialize(tree)?.into(),
            ResourceType::CarePlan => CarePlan::deserialize(tree)?.into(),
            ResourceType::Consent => Consent::deserialize(tree)?.into(),
            ResourceType::Coverage => Coverage::deserialize(tree)?.into(),
            ResourceType::Goal => Goal::deserialize(tree)?.into(),
            ResourceType::List => List::deserialize(tree)?.into(),
            ResourceType::Observation => Observation::deserialize(tree)?.into(),
            ResourceType::OperationOutcome => OperationOutcome::deserialize(tree)?.into(),
            ResourceType::Patient => Patient::deserialize(tree)?.into(),
        })
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        each_variant!(self, inner => inner.serialize(serializer))
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tree = Value::deserialize(deserializer)?;
        resolver::resolve_shallow(&tree).map_err(de::Error::custom)
    }
}
