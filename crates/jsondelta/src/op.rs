//! Patch operation type.
//!
//! The differ emits `add`, `replace`, and `remove`; `test` completes the
//! wire vocabulary for callers that construct assertion patches by hand.

use serde_json::Value;

/// A single RFC 6902 patch operation addressed by a JSON Pointer string.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOp {
    Add { path: String, value: Value },
    Replace { path: String, value: Value },
    Remove { path: String },
    Test { path: String, value: Value },
}

impl PatchOp {
    /// Returns the operation name string.
    pub fn op_name(&self) -> &'static str {
        match self {
            PatchOp::Add { .. } => "add",
            PatchOp::Replace { .. } => "replace",
            PatchOp::Remove { .. } => "remove",
            PatchOp::Test { .. } => "test",
        }
    }

    /// Returns the pointer the operation targets.
    pub fn path(&self) -> &str {
        match self {
            PatchOp::Add { path, .. } => path,
            PatchOp::Replace { path, .. } => path,
            PatchOp::Remove { path } => path,
            PatchOp::Test { path, .. } => path,
        }
    }

    /// Returns the carried value, if the operation has one.
    ///
    /// `add`, `replace`, and `test` always carry a value (a literal JSON
    /// `null` counts); `remove` never does.
    pub fn value(&self) -> Option<&Value> {
        match self {
            PatchOp::Add { value, .. } => Some(value),
            PatchOp::Replace { value, .. } => Some(value),
            PatchOp::Remove { .. } => None,
            PatchOp::Test { value, .. } => Some(value),
        }
    }
}
