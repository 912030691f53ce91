use crate::op::PatchOp;

/// Stable sort of operations by pointer string, lexicographically.
///
/// The differ emits operations in production order, which is the order a
/// patch must be applied in; this helper is for callers that want
/// canonicalised output for display or comparison.
pub fn sort_by_path(ops: &mut [PatchOp]) {
    ops.sort_by(|a, b| a.path().cmp(b.path()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sorts_lexicographically() {
        let mut ops = vec![
            PatchOp::Remove { path: "/b".into() },
            PatchOp::Add {
                path: "/a/1".into(),
                value: json!(1),
            },
            PatchOp::Add {
                path: "/a/0".into(),
                value: json!(0),
            },
        ];
        sort_by_path(&mut ops);
        let paths: Vec<&str> = ops.iter().map(PatchOp::path).collect();
        assert_eq!(paths, vec!["/a/0", "/a/1", "/b"]);
    }

    #[test]
    fn equal_paths_keep_relative_order() {
        let mut ops = vec![
            PatchOp::Remove { path: "/a".into() },
            PatchOp::Add {
                path: "/a".into(),
                value: json!(1),
            },
        ];
        sort_by_path(&mut ops);
        assert_eq!(ops[0].op_name(), "remove");
        assert_eq!(ops[1].op_name(), "add");
    }
}
