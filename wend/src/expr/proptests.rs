//! Property-based tests for expression construction and resolution.

use super::{ExprKind, PathExpr};
use crate::bindings::Bindings;
use crate::path::ops;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_]{1,10}"
}

/// A segment is either literal text or a param name.
#[derive(Debug, Clone)]
enum Segment {
    Text(String),
    Param(String),
}

fn segment_strategy() -> impl Strategy<Value = Segment> {
    prop_oneof![
        component_strategy().prop_map(Segment::Text),
        "[a-e]".prop_map(Segment::Param),
    ]
}

fn build(root: &str, segments: &[Segment]) -> PathExpr {
    segments
        .iter()
        .fold(PathExpr::literal(root), |acc, segment| match segment {
            Segment::Text(text) => acc.join(text.as_str()),
            Segment::Param(name) => acc.join(PathExpr::param(name.as_str())),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // A chain of literal joins always folds to a single literal.
    #[test]
    fn literal_chains_fold(parts in prop::collection::vec(component_strategy(), 1..8)) {
        let expr = build("/", &parts.iter().cloned().map(Segment::Text).collect::<Vec<_>>());
        let expected: PathBuf = Path::new("/").join(parts.iter().collect::<PathBuf>());
        prop_assert_eq!(expr.as_literal(), Some(expected.as_path()));
    }

    // Required params are exactly the params used to build the expression.
    #[test]
    fn required_params_are_the_params_used(segments in prop::collection::vec(segment_strategy(), 0..8)) {
        let expr = build("/root", &segments);
        let used: BTreeSet<String> = segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Param(name) => Some(name.clone()),
                Segment::Text(_) => None,
            })
            .collect();
        prop_assert_eq!(expr.required_params(), used);
    }

    // Binding params late gives the same path as writing their values in.
    #[test]
    fn late_binding_matches_early_substitution(
        segments in prop::collection::vec(segment_strategy(), 0..8),
        values in prop::collection::vec(component_strategy(), 5),
    ) {
        let values: BTreeMap<String, String> = ["a", "b", "c", "d", "e"]
            .into_iter()
            .map(String::from)
            .zip(values)
            .collect();
        let bindings: Bindings = values.iter().map(|(k, v)| (k.clone(), v.clone())).collect();

        let substituted: Vec<Segment> = segments
            .iter()
            .map(|segment| match segment {
                Segment::Param(name) => Segment::Text(values[name].clone()),
                text @ Segment::Text(_) => text.clone(),
            })
            .collect();
        let late = build("/base", &segments).resolve(&bindings).unwrap();
        let early = build("/base", &substituted);
        prop_assert_eq!(Some(late.as_path()), early.as_literal());
    }

    // Parent of `x / atom` is the very node `x`.
    #[test]
    fn parent_drops_atomic_segment(
        segments in prop::collection::vec(segment_strategy(), 0..6),
        last in segment_strategy(),
    ) {
        let base = build("/", &segments).join(PathExpr::param("z"));
        let expr = match &last {
            Segment::Text(text) => base.join(text.as_str()),
            Segment::Param(name) => base.join(PathExpr::param(name.as_str())),
        };
        prop_assert!(expr.parent().same_node(&base));
    }

    // However many suffixes are stacked, one WithSuffix node remains.
    #[test]
    fn suffix_chains_collapse(suffixes in prop::collection::vec("\\.[a-z]{1,4}", 1..6)) {
        let base = PathExpr::param("root").join("file.txt");
        let expr = suffixes.iter().fold(base.clone(), |acc, suffix| acc.with_suffix(suffix.as_str()));
        match expr.kind() {
            ExprKind::WithSuffix { base: inner, suffix } => {
                prop_assert!(inner.same_node(&base));
                prop_assert_eq!(suffix, suffixes.last().unwrap());
            }
            other => prop_assert!(false, "expected with_suffix, got {:?}", other),
        }

        let resolved = expr.resolve(&Bindings::from([("root", "/r")])).unwrap();
        let last = suffixes.last().unwrap();
        prop_assert_eq!(resolved, ops::with_suffix(Path::new("/r/file.txt"), last));
    }
}
