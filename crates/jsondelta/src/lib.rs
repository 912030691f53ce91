//! jsondelta - structural JSON differ.
//!
//! Given two JSON documents `a` (original) and `b` (modified),
//! [`create_patch`] produces RFC 6902 operations (`add`, `replace`,
//! `remove`) describing how `b` differs from `a`. The differ is
//! parameterised by:
//!
//! - a [`Collections`] descriptor classifying array locations as ordered
//!   arrays, entity sets (keyed by a designated field), or, by default,
//!   primitive sets compared as unordered multisets;
//! - a [`PatchStrategy`]: `exact-match` emits removals for collection
//!   elements missing from `b`, `ensure-exists` only guarantees presence,
//!   `ensure-absent` is reserved;
//! - a list of JSONPath selectors whose values are stripped from both
//!   inputs before diffing.
//!
//! Objects are always patched additively: keys present in `a` but absent
//! from `b` are never removed.
//!
//! ```
//! use jsondelta::{create_patch, Collections, PatchStrategy};
//!
//! let a = br#"{"a": 100, "c": "hello"}"#;
//! let b = br#"{"a": 100, "c": "goodbye"}"#;
//! let ops = create_patch(a, b, &Collections::new(), &[], PatchStrategy::ExactMatch).unwrap();
//! assert_eq!(ops.len(), 1);
//! assert_eq!(ops[0].path(), "/c");
//! ```

pub mod codec;

mod collections;
mod differ;
mod error;
mod ignore;
mod op;
mod selector;
mod sort;
mod strategy;

pub use collections::Collections;
pub use differ::{create_patch, create_patch_from_values};
pub use error::DiffError;
pub use op::PatchOp;
pub use selector::pointer_to_json_path;
pub use sort::sort_by_path;
pub use strategy::PatchStrategy;

pub use jsondelta_json_equal::{canonical_string, deep_equal, matches_value};
