//! RFC 6901 JSON Pointer utilities for the jsondelta differ.
//!
//! Pointers are kept as plain strings throughout the differ; this crate owns
//! the escaping rules and the segment-level helpers used to build and take
//! apart those strings.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("json pointer must start with '/' or be empty")]
    NotAbsolute,
}

/// Unescapes one JSON Pointer token component (`~1` → `/`, then `~0` → `~`).
///
/// A trailing or unrecognised escape leaves the `~` in place.
pub fn unescape_component(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    let mut chars = component.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '~' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('0') => {
                chars.next();
                out.push('~');
            }
            Some('1') => {
                chars.next();
                out.push('/');
            }
            _ => out.push('~'),
        }
    }
    out
}

/// Escapes one JSON Pointer token component (`~` → `~0`, `/` → `~1`).
pub fn escape_component(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    for ch in component.chars() {
        match ch {
            '~' => out.push_str("~0"),
            '/' => out.push_str("~1"),
            other => out.push(other),
        }
    }
    out
}

/// Parse an RFC 6901 absolute pointer into unescaped path components.
///
/// The empty pointer names the document root and parses to no components;
/// `"/"` parses to a single empty key.
pub fn parse_json_pointer(pointer: &str) -> Result<Vec<String>, JsonPointerError> {
    match pointer.strip_prefix('/') {
        Some(rest) => Ok(rest.split('/').map(unescape_component).collect()),
        None if pointer.is_empty() => Ok(Vec::new()),
        None => Err(JsonPointerError::NotAbsolute),
    }
}

/// Format unescaped path components into an RFC 6901 pointer.
pub fn format_json_pointer(path: &[String]) -> String {
    path.iter()
        .map(|component| format!("/{}", escape_component(component)))
        .collect()
}

/// Append one unescaped segment to a pointer string.
///
/// The segment is escaped before it is appended, so keys containing `~` or
/// `/` stay addressable. The empty pointer names the document root.
pub fn append_segment(pointer: &str, segment: &str) -> String {
    let key = escape_component(segment);
    if pointer.is_empty() {
        return format!("/{key}");
    }
    if pointer.ends_with('/') {
        return format!("{pointer}{key}");
    }
    format!("{pointer}/{key}")
}

/// Append a decimal array index to a pointer string.
pub fn append_index(pointer: &str, index: usize) -> String {
    append_segment(pointer, &index.to_string())
}
