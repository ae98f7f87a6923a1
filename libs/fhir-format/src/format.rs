//! Runtime selection of a codec

use crate::codec::{Bson, Codec, Json};
use crate::error::{FormatError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use vellum_models::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Bson,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => Json::NAME,
            Format::Bson => Bson::NAME,
        }
    }

    /// Format named by a file extension (`.json`, `.bson`), case-insensitive
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        extension.parse().ok()
    }

    /// Read and resolve a top-level resource
    pub fn decode(&self, bytes: &[u8]) -> Result<Resource> {
        match self {
            Format::Json => crate::decode::<Json>(bytes),
            Format::Bson => crate::decode::<Bson>(bytes),
        }
    }

    /// Encode a resource; `pretty` only affects JSON
    pub fn encode(&self, resource: &Resource, pretty: bool) -> Result<Vec<u8>> {
        match self {
            Format::Json if pretty => Json::write_pretty(&crate::to_container::<Json>(resource)?),
            Format::Json => crate::encode::<Json>(resource),
            Format::Bson => crate::encode::<Bson>(resource),
        }
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "bson" => Ok(Format::Bson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
