//! Error types for FHIR models

use crate::resource::ResourceType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing resourceType at {location}")]
    MissingDiscriminant { location: String },

    #[error("Cannot determine resource type at {location}: resourceType is absent")]
    UnknownVariant { location: String },

    #[error("Expected resourceType to be {expected}, instead received {found}")]
    DiscriminantMismatch {
        expected: ResourceType,
        found: String,
    },

    #[error("Unrecognized resource type: {0}")]
    UnrecognizedVariant(String),

    #[error("Malformed field at {location}: {message}")]
    MalformedField { location: String, message: String },

    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
