//! Ignored-fields pre-pass.
//!
//! Strips the values named by JSONPath selectors from a document before any
//! diffing happens. Two selector forms are recognised: a plain object walk
//! (`$.a.b.c`) and a single array wildcard (`$.a.b[*].c`, deleting `c` from
//! every element of the array at `$.a.b`). Missing paths are silently
//! skipped; malformed wildcard selectors fail the pre-pass.

use serde_json::Value;

use crate::error::DiffError;

pub(crate) fn remove_ignored_fields(
    doc: &mut Value,
    ignored_fields: &[String],
) -> Result<(), DiffError> {
    for selector in ignored_fields {
        remove_selector(doc, selector)?;
    }
    Ok(())
}

fn remove_selector(doc: &mut Value, selector: &str) -> Result<(), DiffError> {
    if selector.contains("[*]") {
        return remove_from_array_elements(doc, selector);
    }
    let path = strip_root(selector);
    if !path.is_empty() {
        delete_dotted(doc, path);
    }
    Ok(())
}

fn remove_from_array_elements(doc: &mut Value, selector: &str) -> Result<(), DiffError> {
    let pieces: Vec<&str> = selector.split("[*].").collect();
    if pieces.len() != 2 || pieces[1].is_empty() {
        return Err(DiffError::IgnoredFieldPrePass(
            "invalid wildcard path format".to_string(),
        ));
    }
    let array_path = strip_root(pieces[0]);
    let suffix = pieces[1];
    if array_path.is_empty() {
        return Ok(());
    }
    if let Some(Value::Array(items)) = lookup_dotted_mut(doc, array_path) {
        for item in items {
            delete_dotted(item, suffix);
        }
    }
    Ok(())
}

fn strip_root(selector: &str) -> &str {
    selector
        .strip_prefix("$.")
        .or_else(|| selector.strip_prefix('$'))
        .unwrap_or(selector)
}

fn lookup_dotted_mut<'a>(value: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    let mut current = value;
    for key in path.split('.') {
        current = current.as_object_mut()?.get_mut(key)?;
    }
    Some(current)
}

fn delete_dotted(value: &mut Value, path: &str) {
    let (parent_value, key) = match path.rsplit_once('.') {
        Some((parent, key)) => match lookup_dotted_mut(value, parent) {
            Some(parent_value) => (parent_value, key),
            None => return,
        },
        None => (value, path),
    };
    if let Some(map) = parent_value.as_object_mut() {
        map.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_selector_deletes_nested_key() {
        let mut doc = json!({"a": {"b": {"c": 1, "d": 2}}});
        remove_ignored_fields(&mut doc, &["$.a.b.c".to_string()]).unwrap();
        assert_eq!(doc, json!({"a": {"b": {"d": 2}}}));
    }

    #[test]
    fn missing_path_is_skipped() {
        let mut doc = json!({"a": 1});
        remove_ignored_fields(&mut doc, &["$.x.y".to_string()]).unwrap();
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn wildcard_deletes_from_every_element() {
        let mut doc = json!({"b": [{"c": 1, "d": "x"}, {"c": 2, "d": "y"}, {"c": 3}]});
        remove_ignored_fields(&mut doc, &["$.b[*].d".to_string()]).unwrap();
        assert_eq!(doc, json!({"b": [{"c": 1}, {"c": 2}, {"c": 3}]}));
    }

    #[test]
    fn wildcard_with_dotted_suffix() {
        let mut doc = json!({"b": [{"c": {"d": 1, "e": 2}}]});
        remove_ignored_fields(&mut doc, &["$.b[*].c.d".to_string()]).unwrap();
        assert_eq!(doc, json!({"b": [{"c": {"e": 2}}]}));
    }

    #[test]
    fn wildcard_on_non_array_is_skipped() {
        let mut doc = json!({"b": {"c": 1}});
        remove_ignored_fields(&mut doc, &["$.b[*].c".to_string()]).unwrap();
        assert_eq!(doc, json!({"b": {"c": 1}}));
    }

    #[test]
    fn dangling_wildcard_is_an_error() {
        let mut doc = json!({"b": []});
        let err = remove_ignored_fields(&mut doc, &["$.b[*]".to_string()]).unwrap_err();
        assert!(matches!(err, DiffError::IgnoredFieldPrePass(_)));
    }

    #[test]
    fn double_wildcard_is_an_error() {
        let mut doc = json!({"b": []});
        let err = remove_ignored_fields(&mut doc, &["$.b[*].c[*].d".to_string()]).unwrap_err();
        assert!(matches!(err, DiffError::IgnoredFieldPrePass(_)));
    }

    #[test]
    fn bare_root_selector_is_skipped() {
        let mut doc = json!({"a": 1});
        remove_ignored_fields(&mut doc, &["$".to_string()]).unwrap();
        assert_eq!(doc, json!({"a": 1}));
    }
}
