//! JSON codec for patch operations.
//!
//! Converts operations to/from `serde_json::Value` in the RFC 6902 wire form
//! `{"op", "path", "value"}`. `value` is present for `add`, `replace`, and
//! `test`; `remove` carries none.

use jsondelta_json_pointer::parse_json_pointer;
use serde_json::{json, Map, Value};

use crate::error::DiffError;
use crate::op::PatchOp;

/// Serialize an operation to its wire form.
pub fn to_json(op: &PatchOp) -> Value {
    match op {
        PatchOp::Add { path, value } => json!({
            "op": "add",
            "path": path,
            "value": value
        }),
        PatchOp::Replace { path, value } => json!({
            "op": "replace",
            "path": path,
            "value": value
        }),
        PatchOp::Remove { path } => json!({
            "op": "remove",
            "path": path
        }),
        PatchOp::Test { path, value } => json!({
            "op": "test",
            "path": path,
            "value": value
        }),
    }
}

/// Deserialize a wire-form operation.
pub fn from_json(v: &Value) -> Result<PatchOp, DiffError> {
    let obj = v
        .as_object()
        .ok_or_else(|| DiffError::InvalidOperation("operation must be an object".into()))?;
    let op = obj
        .get("op")
        .and_then(Value::as_str)
        .ok_or_else(|| DiffError::InvalidOperation("missing 'op' field".into()))?;
    let path = decode_path(obj)?;

    match op {
        "add" => Ok(PatchOp::Add {
            path,
            value: required_value(obj, "add")?,
        }),
        "replace" => Ok(PatchOp::Replace {
            path,
            value: required_value(obj, "replace")?,
        }),
        "remove" => Ok(PatchOp::Remove { path }),
        "test" => Ok(PatchOp::Test {
            path,
            value: required_value(obj, "test")?,
        }),
        other => Err(DiffError::InvalidOperation(format!("unknown op: {other}"))),
    }
}

/// Serialize a list of operations to a JSON array.
pub fn to_json_patch(ops: &[PatchOp]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

/// Deserialize a JSON array into a list of operations.
pub fn from_json_patch(v: &Value) -> Result<Vec<PatchOp>, DiffError> {
    let arr = v
        .as_array()
        .ok_or_else(|| DiffError::InvalidOperation("patch must be an array".into()))?;
    arr.iter().map(from_json).collect()
}

fn decode_path(obj: &Map<String, Value>) -> Result<String, DiffError> {
    let raw = obj
        .get("path")
        .and_then(Value::as_str)
        .ok_or_else(|| DiffError::InvalidOperation("path must be a string".into()))?;
    parse_json_pointer(raw).map_err(|e| DiffError::InvalidOperation(e.to_string()))?;
    Ok(raw.to_string())
}

fn required_value(obj: &Map<String, Value>, op: &str) -> Result<Value, DiffError> {
    obj.get("value")
        .cloned()
        .ok_or_else(|| DiffError::InvalidOperation(format!("{op} requires 'value'")))
}
