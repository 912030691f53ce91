//! Recursive diff engine.
//!
//! [`create_patch`] walks two parsed documents leaf-first and accumulates a
//! flat operation list. Objects are patched additively (keys present only in
//! the original are never removed); arrays are handed to one of three
//! collection disciplines depending on how the location is classified in the
//! [`Collections`] descriptor.

use std::collections::{HashMap, HashSet};

use jsondelta_json_equal::{canonical_string, deep_equal, matches_value};
use jsondelta_json_pointer::{append_index, append_segment};
use serde_json::{Map, Value};

use crate::collections::Collections;
use crate::error::DiffError;
use crate::ignore::remove_ignored_fields;
use crate::op::PatchOp;
use crate::selector::SelectorCache;
use crate::strategy::PatchStrategy;

/// Creates a patch describing how the modified document `b` differs from the
/// original document `a`.
///
/// Both inputs are UTF-8 JSON text. Values named by `ignored_fields` are
/// stripped from both documents before diffing, so the patch never mentions
/// them. The operation list is returned in production order; see
/// [`sort_by_path`](crate::sort_by_path) for canonicalised output.
pub fn create_patch(
    a: &[u8],
    b: &[u8],
    collections: &Collections,
    ignored_fields: &[String],
    strategy: PatchStrategy,
) -> Result<Vec<PatchOp>, DiffError> {
    let a: Value = serde_json::from_slice(a).map_err(|_| DiffError::InvalidJsonDocument)?;
    let b: Value = serde_json::from_slice(b).map_err(|_| DiffError::InvalidJsonDocument)?;
    create_patch_from_values(&a, &b, collections, ignored_fields, strategy)
}

/// Like [`create_patch`], for callers that already hold parsed documents.
pub fn create_patch_from_values(
    a: &Value,
    b: &Value,
    collections: &Collections,
    ignored_fields: &[String],
    strategy: PatchStrategy,
) -> Result<Vec<PatchOp>, DiffError> {
    let mut a = a.clone();
    let mut b = b.clone();
    remove_ignored_fields(&mut a, ignored_fields)?;
    remove_ignored_fields(&mut b, ignored_fields)?;

    let mut differ = Differ::new(collections, strategy);
    let mut ops = Vec::new();
    differ.diff_values(&a, &b, "", &mut ops);
    Ok(ops)
}

struct Differ<'a> {
    collections: &'a Collections,
    strategy: PatchStrategy,
    selectors: SelectorCache,
}

impl<'a> Differ<'a> {
    fn new(collections: &'a Collections, strategy: PatchStrategy) -> Self {
        Self {
            collections,
            strategy,
            selectors: SelectorCache::new(),
        }
    }

    fn is_ordered_array(&mut self, pointer: &str) -> bool {
        let selector = self.selectors.translate(pointer);
        self.collections.is_array(&selector)
    }

    fn entity_set_key(&mut self, pointer: &str) -> Option<String> {
        let selector = self.selectors.translate(pointer);
        self.collections
            .entity_set_key(&selector)
            .map(str::to_string)
    }

    /// Dispatches on the pair of value shapes at `path`.
    fn diff_values(&mut self, a: &Value, b: &Value, path: &str, ops: &mut Vec<PatchOp>) {
        match (a, b) {
            (Value::Object(a_map), Value::Object(b_map)) => {
                self.diff_objects(a_map, b_map, path, ops);
            }

            (Value::Null, Value::Null) => {}
            (Value::Null, _) => ops.push(PatchOp::Add {
                path: path.to_string(),
                value: b.clone(),
            }),

            (Value::Array(a_items), Value::Array(b_items)) => {
                if self.is_ordered_array(path) {
                    if a_items.len() == b_items.len() {
                        for (i, (a_el, b_el)) in a_items.iter().zip(b_items).enumerate() {
                            let child = append_index(path, i);
                            self.diff_values(a_el, b_el, &child, ops);
                        }
                    } else {
                        self.diff_collection(a_items, b_items, path, ops);
                    }
                } else if !matches_value(a, b, true) {
                    self.diff_collection(a_items, b_items, path, ops);
                }
            }

            (Value::String(_) | Value::Number(_) | Value::Bool(_), _) => {
                if !matches_value(a, b, false) {
                    ops.push(PatchOp::Replace {
                        path: path.to_string(),
                        value: b.clone(),
                    });
                }
            }

            // Shape changed (object or array on one side only): replace the
            // whole value.
            _ => ops.push(PatchOp::Replace {
                path: path.to_string(),
                value: b.clone(),
            }),
        }
    }

    fn diff_objects(
        &mut self,
        a: &Map<String, Value>,
        b: &Map<String, Value>,
        path: &str,
        ops: &mut Vec<PatchOp>,
    ) {
        for (key, b_value) in b {
            let child = append_segment(path, key);
            match a.get(key) {
                None => ops.push(PatchOp::Add {
                    path: child,
                    value: b_value.clone(),
                }),
                Some(a_value) if !same_json_type(a_value, b_value) => {
                    ops.push(PatchOp::Replace {
                        path: child,
                        value: b_value.clone(),
                    });
                }
                Some(a_value) => self.diff_values(a_value, b_value, &child, ops),
            }
        }
        // Keys present only in `a` are left alone: objects are patched
        // toward the desired shape, never purged.
    }

    fn diff_collection(
        &mut self,
        a_items: &[Value],
        b_items: &[Value],
        path: &str,
        ops: &mut Vec<PatchOp>,
    ) {
        // Reserved strategy: no collection-level operations.
        if self.strategy == PatchStrategy::EnsureAbsent {
            return;
        }
        if self.is_ordered_array(path) {
            self.diff_ordered_array(a_items, b_items, path, ops);
        } else if let Some(key_field) = self.entity_set_key(path) {
            self.diff_entity_set(a_items, b_items, path, &key_field, ops);
        } else {
            self.diff_primitive_set(a_items, b_items, path, ops);
        }
    }

    /// Ordered arrays: elements pair up greedily by deep equality, left to
    /// right, each element consumed at most once so duplicates stay
    /// significant.
    fn diff_ordered_array(
        &mut self,
        a_items: &[Value],
        b_items: &[Value],
        path: &str,
        ops: &mut Vec<PatchOp>,
    ) {
        let mut matched_a = vec![false; a_items.len()];
        let mut matched_b = vec![false; b_items.len()];
        for (i, a_el) in a_items.iter().enumerate() {
            for (j, b_el) in b_items.iter().enumerate() {
                if matched_b[j] {
                    continue;
                }
                if deep_equal(a_el, b_el) {
                    matched_a[i] = true;
                    matched_b[j] = true;
                    break;
                }
            }
        }

        // Removals target the source array and must run highest-index first
        // so earlier removals do not shift later targets.
        if self.strategy == PatchStrategy::ExactMatch {
            for i in (0..a_items.len()).rev() {
                if !matched_a[i] {
                    ops.push(PatchOp::Remove {
                        path: append_index(path, i),
                    });
                }
            }
        }

        for (j, b_el) in b_items.iter().enumerate() {
            if !matched_b[j] {
                ops.push(PatchOp::Add {
                    path: append_index(path, j),
                    value: b_el.clone(),
                });
            }
        }
    }

    /// Entity sets: element identity is the canonical text of the value at
    /// `key_field`. Matched entities are recursively diffed in place;
    /// emission order per location is removals, then updates, then adds.
    fn diff_entity_set(
        &mut self,
        a_items: &[Value],
        b_items: &[Value],
        path: &str,
        key_field: &str,
        ops: &mut Vec<PatchOp>,
    ) {
        let mut removals = 0;
        if self.strategy == PatchStrategy::ExactMatch {
            let b_keys: HashSet<String> = b_items
                .iter()
                .map(|el| entity_identity(el, key_field))
                .collect();
            let stale: Vec<usize> = a_items
                .iter()
                .enumerate()
                .filter(|(_, el)| !b_keys.contains(&entity_identity(el, key_field)))
                .map(|(i, _)| i)
                .collect();
            removals = stale.len();
            for i in stale.into_iter().rev() {
                ops.push(PatchOp::Remove {
                    path: append_index(path, i),
                });
            }
        }
        let offset = a_items.len() - removals;

        let mut a_keys: HashMap<String, usize> = HashMap::new();
        for (i, el) in a_items.iter().enumerate() {
            a_keys.insert(entity_identity(el, key_field), i);
        }

        let mut updates = Vec::new();
        let mut adds = Vec::new();
        for b_el in b_items {
            match a_keys.get(&entity_identity(b_el, key_field)) {
                Some(&matched) => {
                    let child = append_index(path, matched);
                    self.diff_values(&a_items[matched], b_el, &child, &mut updates);
                }
                None => {
                    adds.push(PatchOp::Add {
                        path: append_index(path, offset + adds.len()),
                        value: b_el.clone(),
                    });
                }
            }
        }
        ops.append(&mut updates);
        ops.append(&mut adds);
    }

    /// Primitive sets: element identity is the canonical text of the whole
    /// element. Matching is by membership, not multiset subtraction, so a
    /// duplicated element counts as found whenever the other side holds at
    /// least one copy.
    fn diff_primitive_set(
        &mut self,
        a_items: &[Value],
        b_items: &[Value],
        path: &str,
        ops: &mut Vec<PatchOp>,
    ) {
        let mut removals = 0;
        if self.strategy == PatchStrategy::ExactMatch {
            let b_serials: HashSet<String> = b_items.iter().map(canonical_string).collect();
            let stale: Vec<usize> = a_items
                .iter()
                .enumerate()
                .filter(|(_, el)| !b_serials.contains(&canonical_string(el)))
                .map(|(i, _)| i)
                .collect();
            removals = stale.len();
            for i in stale.into_iter().rev() {
                ops.push(PatchOp::Remove {
                    path: append_index(path, i),
                });
            }
        }
        let offset = a_items.len() - removals;

        let a_serials: HashSet<String> = a_items.iter().map(canonical_string).collect();
        let mut added = 0;
        for b_el in b_items {
            if !a_serials.contains(&canonical_string(b_el)) {
                ops.push(PatchOp::Add {
                    path: append_index(path, offset + added),
                    value: b_el.clone(),
                });
                added += 1;
            }
        }
    }
}

fn same_json_type(a: &Value, b: &Value) -> bool {
    matches!(
        (a, b),
        (Value::Null, Value::Null)
            | (Value::Bool(_), Value::Bool(_))
            | (Value::Number(_), Value::Number(_))
            | (Value::String(_), Value::String(_))
            | (Value::Array(_), Value::Array(_))
            | (Value::Object(_), Value::Object(_))
    )
}

// The identity of an entity-set element. An absent key field canonicalises
// as `null`, which also covers non-object elements.
fn entity_identity(element: &Value, key_field: &str) -> String {
    canonical_string(element.get(key_field).unwrap_or(&Value::Null))
}
