use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("expected a JSON object for the resource")]
    ExpectedObject,
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("BSON read error: {0}")]
    BsonRead(#[from] bson::de::Error),
    #[error("BSON write error: {0}")]
    BsonWrite(#[from] bson::ser::Error),
    #[error("unsupported BSON element {element_type} at {key}")]
    UnsupportedBsonType { key: String, element_type: String },
    #[error("non-finite number at {key}")]
    NonFiniteNumber { key: String },
    #[error("unknown format '{0}' (expected json or bson)")]
    UnknownFormat(String),
    #[error(transparent)]
    Resolve(#[from] vellum_models::Error),
}

pub type Result<T> = std::result::Result<T, FormatError>;
