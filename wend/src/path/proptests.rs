//! Property-based tests for the lexical path operations.

use super::ops::{join, parent, with_name, with_suffix};
use proptest::prelude::*;
use std::path::{Path, PathBuf};

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn relative_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(component_strategy(), 1..6)
        .prop_map(|parts| parts.iter().collect::<PathBuf>())
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    relative_path_strategy().prop_map(|relative| Path::new("/").join(relative))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // The parent of `p / name` is `p` for any single component.
    #[test]
    fn parent_undoes_single_join(base in absolute_path_strategy(), name in component_strategy()) {
        let joined = join(&base, Path::new(&name));
        prop_assert_eq!(parent(&joined), base);
    }

    // Joining an absolute path discards the left operand.
    #[test]
    fn absolute_right_replaces(left in absolute_path_strategy(), right in absolute_path_strategy()) {
        prop_assert_eq!(join(&left, &right), right);
    }

    // Join is associative on relative tails.
    #[test]
    fn join_is_associative(
        a in absolute_path_strategy(),
        b in relative_path_strategy(),
        c in relative_path_strategy(),
    ) {
        prop_assert_eq!(join(&join(&a, &b), &c), join(&a, &join(&b, &c)));
    }

    // Renaming keeps the parent and sets the final component.
    #[test]
    fn with_name_keeps_parent(path in absolute_path_strategy(), name in component_strategy()) {
        let renamed = with_name(&path, &name);
        prop_assert_eq!(parent(&renamed), parent(&path));
        prop_assert_eq!(renamed.file_name().and_then(|n| n.to_str()), Some(name.as_str()));
    }

    // Applying two suffixes is the same as applying only the second.
    #[test]
    fn suffix_replacement_is_last_wins(
        path in absolute_path_strategy(),
        first in "[a-z]{1,4}",
        second in "[a-z]{1,4}",
    ) {
        let once = with_suffix(&path, &format!(".{first}")).unwrap();
        let twice = with_suffix(&once, &format!(".{second}")).unwrap();
        prop_assert_eq!(twice, with_suffix(&path, &format!(".{second}")).unwrap());
    }
}
