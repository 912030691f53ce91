//! jsondelta-json-equal - structural equality for JSON values.
//!
//! Provides [`deep_equal`] for strict recursive comparison, [`matches_value`]
//! for comparison with an order-insensitive array switch, and
//! [`canonical_string`], the deterministic serialisation that gives set
//! elements and entity keys their identity.
//!
//! Numbers carry JSON-text semantics throughout: `100` and `100.0` are the
//! same number, both for equality and in canonical text.

mod canonical;
mod deep_equal;
mod matches;

pub use canonical::canonical_string;
pub use deep_equal::deep_equal;
pub use matches::matches_value;
