use serde_json::Value;

use crate::canonical::number_eq;

/// Performs a strict deep equality check between two JSON values.
///
/// Types must match exactly (null, bool, number, string, array, object);
/// arrays compare element-wise in order; objects must have identical key
/// sets with equal values.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => number_eq(x, y),
        (Value::String(x), Value::String(y)) => x == y,

        (Value::Array(xs), Value::Array(ys)) => {
            if xs.len() != ys.len() {
                return false;
            }
            xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        }

        (Value::Object(xs), Value::Object(ys)) => {
            if xs.len() != ys.len() {
                return false;
            }
            xs.iter()
                .all(|(key, x)| ys.get(key).is_some_and(|y| deep_equal(x, y)))
        }

        // Different types are never equal
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_equality() {
        assert!(deep_equal(&json!(null), &json!(null)));
        assert!(deep_equal(&json!(true), &json!(true)));
        assert!(deep_equal(&json!("x"), &json!("x")));
        assert!(!deep_equal(&json!("x"), &json!("y")));
    }

    #[test]
    fn numbers_compare_as_floats() {
        let a: Value = serde_json::from_str("100").unwrap();
        let b: Value = serde_json::from_str("100.0").unwrap();
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&json!(100), &json!(101)));
    }

    #[test]
    fn type_mismatch_is_unequal() {
        assert!(!deep_equal(&json!(0), &json!(false)));
        assert!(!deep_equal(&json!(null), &json!(0)));
        assert!(!deep_equal(&json!([]), &json!({})));
    }

    #[test]
    fn arrays_are_order_sensitive() {
        assert!(deep_equal(&json!([1, 2]), &json!([1, 2])));
        assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!deep_equal(&json!([1]), &json!([1, 1])));
    }

    #[test]
    fn objects_require_identical_key_sets() {
        assert!(deep_equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!deep_equal(&json!({"a": 1, "b": 2}), &json!({"a": 1})));
    }

    #[test]
    fn nested_values() {
        let a = json!({"t": [{"k": 1, "v": [1, 2]}]});
        let b = json!({"t": [{"k": 1, "v": [1, 2]}]});
        let c = json!({"t": [{"k": 1, "v": [2, 1]}]});
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &c));
    }
}
