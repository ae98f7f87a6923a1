//! FHIR STU3 resource structs
//!
//! A representative subset of the STU3 resources. Every struct composes
//! [`DomainResource`](crate::resource::DomainResource) (or
//! [`ResourceBase`](crate::resource::ResourceBase) for `Bundle`) and carries
//! its own `resourceType` guard.

mod basic;
mod bundle;
mod care_plan;
mod consent;
mod coverage;
mod goal;
mod list;
mod observation;
mod operation_outcome;
mod patient;

pub use basic::Basic;
pub use bundle::{
    Bundle, BundleEntry, BundleEntryRequest, BundleEntryResponse, BundleEntrySearch,
    BundleEntrySearchMode, BundleLink, BundleType, HttpVerb,
};
pub use care_plan::{CarePlan, CarePlanActivity, CarePlanActivityDetail};
pub use consent::{Consent, ConsentActor, ConsentData, ConsentExcept, ConsentPolicy};
pub use coverage::{Coverage, CoverageGrouping};
pub use goal::{Goal, GoalTarget};
pub use list::{List, ListEntry};
pub use observation::{
    Observation, ObservationComponent, ObservationReferenceRange, ObservationRelated,
    ObservationValue,
};
pub use operation_outcome::{IssueSeverity, OperationOutcome, OperationOutcomeIssue};
pub use patient::{
    AdministrativeGender, Patient, PatientAnimal, PatientCommunication, PatientContact,
    PatientLink,
};
