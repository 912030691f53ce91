//! Pointer-to-selector translation.
//!
//! The differ addresses locations with RFC 6901 pointers while the
//! collections descriptor is keyed by JSONPath selectors; translation maps
//! the root to `$`, integer segments to `[*]`, and string segments to
//! `.name`.

use std::collections::HashMap;

/// Translates an RFC 6901 pointer into the descriptor's JSONPath form.
pub fn pointer_to_json_path(pointer: &str) -> String {
    if pointer.is_empty() || pointer == "/" {
        return "$".to_string();
    }
    let mut out = String::from("$");
    for part in pointer.split('/') {
        if part.is_empty() {
            continue;
        }
        if part.parse::<i64>().is_ok() {
            out.push_str("[*]");
        } else {
            out.push('.');
            out.push_str(part);
        }
    }
    out
}

/// Per-diff memo of pointer translations.
///
/// The same path prefixes are translated once per `create_patch` call no
/// matter how many elements a collection holds.
#[derive(Debug, Default)]
pub(crate) struct SelectorCache {
    translated: HashMap<String, String>,
}

impl SelectorCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn translate(&mut self, pointer: &str) -> String {
        if let Some(hit) = self.translated.get(pointer) {
            return hit.clone();
        }
        let selector = pointer_to_json_path(pointer);
        self.translated
            .insert(pointer.to_string(), selector.clone());
        selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_translates_to_dollar() {
        assert_eq!(pointer_to_json_path(""), "$");
        assert_eq!(pointer_to_json_path("/"), "$");
    }

    #[test]
    fn object_segments_become_dotted_steps() {
        assert_eq!(pointer_to_json_path("/a/b"), "$.a.b");
    }

    #[test]
    fn integer_segments_become_wildcards() {
        assert_eq!(pointer_to_json_path("/t/0"), "$.t[*]");
        assert_eq!(pointer_to_json_path("/t/12/v"), "$.t[*].v");
    }

    #[test]
    fn cache_returns_same_translation() {
        let mut cache = SelectorCache::new();
        assert_eq!(cache.translate("/t/0/v"), "$.t[*].v");
        assert_eq!(cache.translate("/t/0/v"), "$.t[*].v");
        assert_eq!(cache.translate(""), "$");
    }
}
