use std::collections::HashMap;

use serde_json::Value;

use crate::canonical::{canonical_string, number_eq};

/// Returns true if the two values match structurally.
///
/// Types must match, otherwise the result is always false. Objects match
/// when every key on either side matches. When `ignore_array_order` is true
/// and both values are arrays, they are compared as multisets of canonical
/// serialisations; the flag propagates into nested values.
pub fn matches_value(a: &Value, b: &Value, ignore_array_order: bool) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => number_eq(x, y),
        (Value::String(x), Value::String(y)) => x == y,

        (Value::Object(xs), Value::Object(ys)) => {
            if xs.len() != ys.len() {
                return false;
            }
            xs.iter()
                .all(|(key, x)| ys.get(key).is_some_and(|y| matches_value(x, y, ignore_array_order)))
        }

        (Value::Array(xs), Value::Array(ys)) => {
            if xs.len() != ys.len() {
                return false;
            }
            if ignore_array_order {
                multiset_equal(xs, ys)
            } else {
                xs.iter()
                    .zip(ys)
                    .all(|(x, y)| matches_value(x, y, ignore_array_order))
            }
        }

        _ => false,
    }
}

// Multiset comparison over canonical element text. Lengths are already known
// to be equal, so a full decrement pass proves equality.
fn multiset_equal(xs: &[Value], ys: &[Value]) -> bool {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for x in xs {
        *counts.entry(canonical_string(x)).or_insert(0) += 1;
    }
    for y in ys {
        match counts.get_mut(&canonical_string(y)) {
            Some(n) if *n > 0 => *n -= 1,
            _ => return false,
        }
    }
    true
}
