//! The closed set of resource variants and its name lookup table
//!
//! Uses a compile-time perfect hash map (phf) so resolving a `resourceType`
//! string never allocates and the table can never change at runtime.

use phf::phf_map;
use std::fmt;

/// Every resource kind this crate can resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceType {
    Basic,
    Bundle,
    CarePlan,
    Consent,
    Coverage,
    Goal,
    List,
    Observation,
    OperationOutcome,
    Patient,
}

static RESOURCE_TYPES_BY_NAME: phf::Map<&'static str, ResourceType> = phf_map! {
    "Basic" => ResourceType::Basic,
    "Bundle" => ResourceType::Bundle,
    "CarePlan" => ResourceType::CarePlan,
    "Consent" => ResourceType::Consent,
    "Coverage" => ResourceType::Coverage,
    "Goal" => ResourceType::Goal,
    "List" => ResourceType::List,
    "Observation" => ResourceType::Observation,
    "OperationOutcome" => ResourceType::OperationOutcome,
    "Patient" => ResourceType::Patient,
};

impl ResourceType {
    pub const ALL: &'static [ResourceType] = &[
        ResourceType::Basic,
        ResourceType::Bundle,
        ResourceType::CarePlan,
        ResourceType::Consent,
        ResourceType::Coverage,
        ResourceType::Goal,
        ResourceType::List,
        ResourceType::Observation,
        ResourceType::OperationOutcome,
        ResourceType::Patient,
    ];

    /// Canonical `resourceType` name
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Basic => "Basic",
            ResourceType::Bundle => "Bundle",
            ResourceType::CarePlan => "CarePlan",
            ResourceType::Consent => "Consent",
            ResourceType::Coverage => "Coverage",
            ResourceType::Goal => "Goal",
            ResourceType::List => "List",
            ResourceType::Observation => "Observation",
            ResourceType::OperationOutcome => "OperationOutcome",
            ResourceType::Patient => "Patient",
        }
    }

    /// Look up a variant by its exact, case-sensitive name
    pub fn from_name(name: &str) -> Option<Self> {
        RESOURCE_TYPES_BY_NAME.get(name).copied()
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_is_in_the_table() {
        assert_eq!(RESOURCE_TYPES_BY_NAME.len(), ResourceType::ALL.len());
        for ty in ResourceType::ALL {
            assert_eq!(ResourceType::from_name(ty.as_str()), Some(*ty));
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(ResourceType::from_name("patient"), None);
        assert_eq!(ResourceType::from_name("Patient "), None);
        assert_eq!(ResourceType::from_name(""), None);
        assert_eq!(ResourceType::from_name("Bogus"), None);
    }
}
