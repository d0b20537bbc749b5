//! JSON ingestion and lossy JSON projection.
//!
//! `from_json` is total: every JSON document maps onto plain graph values
//! (never intrinsics, never `Undefined`). `to_json` is a *projection*:
//! intrinsics are flattened to JSON-representable stand-ins and `Undefined`
//! object entries are dropped, so the round trip does not preserve type
//! identity. Use it for debugging and interchange, not as a clone.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::{Map as JsonMap, Value as Json};
use thiserror::Error;

use crate::intrinsic::Intrinsic;
use crate::value::Value;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("CIRCULAR_STRUCTURE")]
    Circular,
}

/// Build a graph value from a JSON document.
///
/// # Example
///
/// ```
/// use objkit_graph::{from_json, Value};
/// use serde_json::json;
///
/// let value = from_json(&json!({"a": [1, "two"]}));
/// let a = value.as_object().unwrap().get("a");
/// assert!(a.as_array().unwrap().get(1).strict_eq(&Value::from("two")));
/// ```
pub fn from_json(json: &Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        Json::String(s) => Value::from(s.as_str()),
        Json::Array(items) => Value::array_from(items.iter().map(from_json)),
        Json::Object(entries) => {
            Value::object_from(entries.iter().map(|(k, v)| (k.clone(), from_json(v))))
        }
    }
}

/// Project a graph value onto JSON.
///
/// Lossy by design: `Undefined` becomes null (and is omitted from object
/// entries), non-finite numbers become null, dates become epoch-ms numbers,
/// regexps become their source strings, binary kinds become base64 strings,
/// maps become objects with string-coerced keys, sets become arrays, and
/// key handles become empty objects. Cyclic graphs are an error.
pub fn to_json(value: &Value) -> Result<Json, JsonError> {
    let mut stack = Vec::new();
    project(value, &mut stack)
}

fn project(value: &Value, stack: &mut Vec<usize>) -> Result<Json, JsonError> {
    match value {
        Value::Undefined | Value::Null => Ok(Json::Null),
        Value::Bool(b) => Ok(Json::Bool(*b)),
        Value::Number(n) => Ok(serde_json::Number::from_f64(*n)
            .map(Json::Number)
            .unwrap_or(Json::Null)),
        Value::String(s) => Ok(Json::String(s.to_string())),
        Value::Array(seq) => {
            let addr = container_addr(value)?;
            enter(stack, addr)?;
            let mut items = Vec::with_capacity(seq.len());
            for item in seq.to_vec() {
                items.push(project(&item, stack)?);
            }
            stack.pop();
            Ok(Json::Array(items))
        }
        Value::Object(obj) => {
            let addr = container_addr(value)?;
            enter(stack, addr)?;
            let mut map = JsonMap::new();
            for (key, entry) in obj.entries() {
                if entry.is_undefined() {
                    continue;
                }
                map.insert(key, project(&entry, stack)?);
            }
            stack.pop();
            Ok(Json::Object(map))
        }
        Value::Intrinsic(intrinsic) => {
            let addr = container_addr(value)?;
            enter(stack, addr)?;
            let json = project_intrinsic(intrinsic, stack)?;
            stack.pop();
            Ok(json)
        }
    }
}

fn project_intrinsic(intrinsic: &Intrinsic, stack: &mut Vec<usize>) -> Result<Json, JsonError> {
    match intrinsic {
        Intrinsic::Date { epoch_ms } => Ok(Json::from(*epoch_ms)),
        Intrinsic::Regex(re) => Ok(Json::String(re.as_str().to_string())),
        Intrinsic::Buffer(data) | Intrinsic::DataView(data) => {
            Ok(Json::String(BASE64.encode(data.borrow().as_slice())))
        }
        Intrinsic::View { data, .. } => Ok(Json::String(BASE64.encode(data.borrow().as_slice()))),
        Intrinsic::Blob { data, .. } | Intrinsic::File { data, .. } => {
            Ok(Json::String(BASE64.encode(data)))
        }
        Intrinsic::ImageData {
            width,
            height,
            data,
        } => {
            let mut map = JsonMap::new();
            map.insert("width".to_string(), Json::from(*width));
            map.insert("height".to_string(), Json::from(*height));
            map.insert("data".to_string(), Json::String(BASE64.encode(data)));
            Ok(Json::Object(map))
        }
        Intrinsic::CryptoKey { .. } => Ok(Json::Object(JsonMap::new())),
        Intrinsic::Map(entries) => {
            let mut map = JsonMap::new();
            for (key, entry) in entries.borrow().iter() {
                map.insert(coerce_key(key), project(entry, stack)?);
            }
            Ok(Json::Object(map))
        }
        Intrinsic::Set(members) => {
            let mut items = Vec::new();
            for member in members.borrow().iter() {
                items.push(project(member, stack)?);
            }
            Ok(Json::Array(items))
        }
    }
}

fn coerce_key(key: &Value) -> String {
    match key {
        Value::String(s) => s.to_string(),
        Value::Number(n) => format!("{n}"),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Undefined => "undefined".to_string(),
        other => format!("{other:?}"),
    }
}

fn container_addr(value: &Value) -> Result<usize, JsonError> {
    value.ref_addr().ok_or(JsonError::Circular)
}

fn enter(stack: &mut Vec<usize>, addr: usize) -> Result<(), JsonError> {
    if stack.contains(&addr) {
        return Err(JsonError::Circular);
    }
    stack.push(addr);
    Ok(())
}
