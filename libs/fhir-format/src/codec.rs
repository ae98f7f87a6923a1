//! Codecs between a serialization's native container and the generic tree

use crate::bson_tree;
use crate::error::{FormatError, Result};
use bson::Document;
use serde_json::Value;
use std::borrow::Cow;

/// Adapter for one concrete serialization.
///
/// `read`/`write` move between bytes and the native container;
/// `to_tree`/`from_tree` move between the container and the
/// `serde_json::Value` tree the resolver works on.
pub trait Codec {
    type Container;

    const NAME: &'static str;

    fn read(bytes: &[u8]) -> Result<Self::Container>;

    fn write(container: &Self::Container) -> Result<Vec<u8>>;

    fn to_tree(container: &Self::Container) -> Result<Cow<'_, Value>>;

    fn from_tree(tree: Value) -> Result<Self::Container>;
}

/// JSON text; the container is the tree itself
pub struct Json;

impl Json {
    pub fn write_pretty(container: &Value) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(container)?)
    }
}

impl Codec for Json {
    type Container = Value;

    const NAME: &'static str = "json";

    fn read(bytes: &[u8]) -> Result<Value> {
        let value: Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(FormatError::ExpectedObject);
        }
        Ok(value)
    }

    fn write(container: &Value) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(container)?)
    }

    fn to_tree(container: &Value) -> Result<Cow<'_, Value>> {
        Ok(Cow::Borrowed(container))
    }

    fn from_tree(tree: Value) -> Result<Value> {
        Ok(tree)
    }
}

/// Binary BSON documents
pub struct Bson;

impl Codec for Bson {
    type Container = Document;

    const NAME: &'static str = "bson";

    fn read(bytes: &[u8]) -> Result<Document> {
        let mut reader = bytes;
        Ok(Document::from_reader(&mut reader)?)
    }

    fn write(container: &Document) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        container.to_writer(&mut bytes)?;
        Ok(bytes)
    }

    fn to_tree(container: &Document) -> Result<Cow<'_, Value>> {
        bson_tree::document_to_tree(container).map(Cow::Owned)
    }

    fn from_tree(tree: Value) -> Result<Document> {
        bson_tree::tree_to_document(tree)
    }
}
