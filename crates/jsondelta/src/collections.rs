//! Collection-semantics descriptor.
//!
//! Classifies array-typed locations by JSONPath selector: ordered arrays are
//! compared positionally, entity sets by a designated key field, and every
//! other array location defaults to a primitive set.

use std::collections::{HashMap, HashSet};

/// Immutable classification of array locations, looked up by the JSONPath
/// selector form of each location (`$`, `$.tags`, `$.t[*].v`, ...).
#[derive(Debug, Clone, Default)]
pub struct Collections {
    arrays: HashSet<String>,
    entity_sets: HashMap<String, String>,
}

impl Collections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the array at `selector` as order-significant.
    pub fn add_array(&mut self, selector: impl Into<String>) {
        self.arrays.insert(selector.into());
    }

    /// Marks the array at `selector` as a set of objects identified by the
    /// value of `key_field`.
    pub fn add_entity_set(&mut self, selector: impl Into<String>, key_field: impl Into<String>) {
        self.entity_sets.insert(selector.into(), key_field.into());
    }

    /// Returns true when the location is classified as an ordered array.
    pub fn is_array(&self, selector: &str) -> bool {
        self.arrays.contains(selector)
    }

    /// Returns the key field name when the location is an entity set.
    pub fn entity_set_key(&self, selector: &str) -> Option<&str> {
        self.entity_sets.get(selector).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_classifies_nothing() {
        let collections = Collections::new();
        assert!(!collections.is_array("$.tags"));
        assert_eq!(collections.entity_set_key("$.tags"), None);
    }

    #[test]
    fn array_lookup() {
        let mut collections = Collections::new();
        collections.add_array("$.persons");
        assert!(collections.is_array("$.persons"));
        assert!(!collections.is_array("$.others"));
    }

    #[test]
    fn entity_set_lookup() {
        let mut collections = Collections::new();
        collections.add_entity_set("$.t", "k");
        collections.add_entity_set("$.t[*].v", "nk");
        assert_eq!(collections.entity_set_key("$.t"), Some("k"));
        assert_eq!(collections.entity_set_key("$.t[*].v"), Some("nk"));
        assert_eq!(collections.entity_set_key("$.u"), None);
    }

    #[test]
    fn root_selector() {
        let mut collections = Collections::new();
        collections.add_array("$");
        assert!(collections.is_array("$"));
    }
}
