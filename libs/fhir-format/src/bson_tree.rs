//! Conversion between BSON documents and the generic tree
//!
//! Dates are the one place where stored BSON differs from the JSON shape:
//! besides plain strings they show up as BSON `DateTime` values and as
//! range documents (`{__from, __to, __strDate}`). Both come back as the
//! date string so that the resolver sees the same tree either way. Dates are
//! always written back as plain strings.

use crate::error::{FormatError, Result};
use bson::{Bson, Document};
use chrono::SecondsFormat;
use serde_json::{Map, Number, Value};

/// Key carrying the original date string in a stored date range
pub const STR_DATE_KEY: &str = "__strDate";

pub fn document_to_tree(doc: &Document) -> Result<Value> {
    document_to_object(doc, "")
}

pub fn tree_to_document(tree: Value) -> Result<Document> {
    match tree {
        Value::Object(object) => Ok(object_to_document(object)),
        _ => Err(FormatError::ExpectedObject),
    }
}

fn document_to_object(doc: &Document, path: &str) -> Result<Value> {
    if let Some(Bson::String(date)) = doc.get(STR_DATE_KEY) {
        return Ok(Value::String(date.clone()));
    }

    let mut object = Map::with_capacity(doc.len());
    for (key, value) in doc {
        let child = join(path, key);
        object.insert(key.clone(), bson_to_tree(value, &child)?);
    }
    Ok(Value::Object(object))
}

fn bson_to_tree(value: &Bson, path: &str) -> Result<Value> {
    Ok(match value {
        Bson::Null => Value::Null,
        Bson::Boolean(b) => Value::Bool(*b),
        Bson::Int32(i) => Value::from(*i),
        Bson::Int64(i) => Value::from(*i),
        Bson::Double(f) => Number::from_f64(*f)
            .map(Value::Number)
            .ok_or_else(|| FormatError::NonFiniteNumber {
                key: path.to_string(),
            })?,
        Bson::String(s) => Value::String(s.clone()),
        Bson::Array(items) => Value::Array(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| bson_to_tree(item, &format!("{}[{}]", path, i)))
                .collect::<Result<_>>()?,
        ),
        Bson::Document(doc) => document_to_object(doc, path)?,
        Bson::DateTime(ts) => {
            Value::String(ts.to_chrono().to_rfc3339_opts(SecondsFormat::AutoSi, true))
        }
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        other => {
            tracing::debug!(
                key = path,
                element_type = ?other.element_type(),
                "unsupported BSON element"
            );
            return Err(FormatError::UnsupportedBsonType {
                key: path.to_string(),
                element_type: format!("{:?}", other.element_type()),
            });
        }
    })
}

fn object_to_document(object: Map<String, Value>) -> Document {
    let mut doc = Document::new();
    for (key, value) in object {
        doc.insert(key, tree_to_bson(value));
    }
    doc
}

fn tree_to_bson(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Number(n) => number_to_bson(&n),
        Value::String(s) => Bson::String(s),
        Value::Array(items) => Bson::Array(items.into_iter().map(tree_to_bson).collect()),
        Value::Object(object) => Bson::Document(object_to_document(object)),
    }
}

fn number_to_bson(n: &Number) -> Bson {
    if let Some(i) = n.as_i64() {
        return match i32::try_from(i) {
            Ok(small) => Bson::Int32(small),
            Err(_) => Bson::Int64(i),
        };
    }
    // u64 beyond i64::MAX, or a float; both are always finite here
    Bson::Double(n.as_f64().unwrap_or_default())
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}
