//! Purpose: Static JSON shape of a record, used to name the field behind a type error.
//! Exports: `FieldKind`, `FieldShape`, `RECORD_SHAPE`, `OTHER_SHAPE`, `locate_mismatch`, `nesting_depth`.
//! Role: Decode diagnostics only; serde stays the source of truth for acceptance.
//! Invariants: All four policies share one shape (same keys, same JSON types).
//! Invariants: `null` is acceptable for every field; unknown keys are never reported.
use serde_json::Value;

#[derive(Clone, Copy)]
pub enum FieldKind {
    Text,
    Integer,
    Object(&'static [FieldShape]),
}

#[derive(Clone, Copy)]
pub struct FieldShape {
    pub key: &'static str,
    pub kind: FieldKind,
}

pub static OTHER_SHAPE: [FieldShape; 1] = [FieldShape {
    key: "tagada",
    kind: FieldKind::Text,
}];

pub static RECORD_SHAPE: [FieldShape; 5] = [
    FieldShape {
        key: "name",
        kind: FieldKind::Text,
    },
    FieldShape {
        key: "age",
        kind: FieldKind::Integer,
    },
    FieldShape {
        key: "salary",
        kind: FieldKind::Integer,
    },
    FieldShape {
        key: "employee",
        kind: FieldKind::Object(&RECORD_SHAPE),
    },
    FieldShape {
        key: "other",
        kind: FieldKind::Object(&OTHER_SHAPE),
    },
];

/// Returns the JSON path (`$`, `$.employee.age`, ...) of the first value that does
/// not fit `fields`, in declaration order, or `None` when the document fits.
pub fn locate_mismatch(value: &Value, fields: &[FieldShape]) -> Option<String> {
    let mut path = String::from("$");
    if locate_in_object(value, fields, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn locate_in_object(value: &Value, fields: &[FieldShape], path: &mut String) -> bool {
    let Some(map) = value.as_object() else {
        return true;
    };
    for field in fields {
        let Some(child) = map.get(field.key) else {
            continue;
        };
        let base = path.len();
        path.push('.');
        path.push_str(field.key);
        if locate_in_field(child, field.kind, path) {
            return true;
        }
        path.truncate(base);
    }
    false
}

fn locate_in_field(value: &Value, kind: FieldKind, path: &mut String) -> bool {
    if value.is_null() {
        return false;
    }
    match kind {
        FieldKind::Text => !value.is_string(),
        FieldKind::Integer => value.as_i64().is_none(),
        FieldKind::Object(fields) => locate_in_object(value, fields, path),
    }
}

/// Deepest object/array nesting in raw JSON bytes; brackets inside strings are skipped.
/// Stops counting once `limit` is exceeded.
pub fn nesting_depth(bytes: &[u8], limit: usize) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for &byte in bytes {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = deepest.max(depth);
                if deepest > limit {
                    break;
                }
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

#[cfg(test)]
mod tests {
    use super::{RECORD_SHAPE, locate_mismatch, nesting_depth};
    use serde_json::json;

    #[test]
    fn fitting_documents_have_no_mismatch() {
        let value = json!({
            "name": null,
            "age": 3,
            "employee": {"name": "x", "other": {"tagada": "y"}},
            "unknown": [1, 2]
        });
        assert_eq!(locate_mismatch(&value, &RECORD_SHAPE), None);
    }

    #[test]
    fn non_object_root_is_reported_at_root() {
        assert_eq!(locate_mismatch(&json!([1]), &RECORD_SHAPE).as_deref(), Some("$"));
        assert_eq!(locate_mismatch(&json!(null), &RECORD_SHAPE).as_deref(), Some("$"));
    }

    #[test]
    fn nested_paths_are_reported() {
        let value = json!({"employee": {"employee": {"age": "old"}}});
        assert_eq!(
            locate_mismatch(&value, &RECORD_SHAPE).as_deref(),
            Some("$.employee.employee.age")
        );
        let value = json!({"other": {"tagada": 5}});
        assert_eq!(
            locate_mismatch(&value, &RECORD_SHAPE).as_deref(),
            Some("$.other.tagada")
        );
    }

    #[test]
    fn fractional_and_out_of_range_integers_mismatch() {
        let value = json!({"salary": 1.5});
        assert_eq!(locate_mismatch(&value, &RECORD_SHAPE).as_deref(), Some("$.salary"));
        let value = json!({"age": u64::MAX});
        assert_eq!(locate_mismatch(&value, &RECORD_SHAPE).as_deref(), Some("$.age"));
    }

    #[test]
    fn nested_non_object_is_reported_at_field() {
        let value = json!({"employee": "bob"});
        assert_eq!(locate_mismatch(&value, &RECORD_SHAPE).as_deref(), Some("$.employee"));
    }

    #[test]
    fn nesting_depth_ignores_brackets_in_strings() {
        assert_eq!(nesting_depth(b"{}", 100), 1);
        assert_eq!(nesting_depth(br#"{"a":[{"b":1}],"c":{}}"#, 100), 3);
        assert_eq!(nesting_depth(br#"{"name":"{[{[\"{"}"#, 100), 1);
        assert_eq!(nesting_depth(b"42", 100), 0);
    }

    #[test]
    fn nesting_depth_stops_past_limit() {
        let deep = "[".repeat(10_000);
        assert_eq!(nesting_depth(deep.as_bytes(), 5), 6);
    }
}
