//! Property tests for the asymmetric relationship laws.
//!
//! Paths are generated with arbitrary lengths, divergence points and
//! reversible pointer kinds.

use lexipath::{AsymmetricRelationship, PathNode, PathNodeList, PointerKind, SynsetId};
use proptest::prelude::*;

fn reversible_kind() -> impl Strategy<Value = PointerKind> {
    prop::sample::select(
        PointerKind::ALL
            .iter()
            .copied()
            .filter(|k| k.symmetric_counterpart().is_ok())
            .collect::<Vec<_>>(),
    )
}

/// (kinds, divergence index) with 1..=12 nodes.
fn path_and_index() -> impl Strategy<Value = (Vec<PointerKind>, usize)> {
    prop::collection::vec(reversible_kind(), 1..=12)
        .prop_flat_map(|kinds| {
            let len = kinds.len();
            (Just(kinds), 0..len)
        })
}

fn build(kinds: &[PointerKind], index: usize) -> AsymmetricRelationship {
    let nodes: PathNodeList = kinds
        .iter()
        .enumerate()
        .map(|(i, &k)| PathNode::new(k, SynsetId::noun(i as u64)))
        .collect();
    AsymmetricRelationship::new(
        PointerKind::Hypernym,
        nodes,
        index,
        SynsetId::noun(0),
        SynsetId::noun(kinds.len() as u64 - 1),
    )
    .unwrap()
}

proptest! {
    /// Property: depth is (n-1-d) - d and stable across calls
    #[test]
    fn test_depth_law((kinds, d) in path_and_index()) {
        let rel = build(&kinds, d);
        let n = kinds.len() as i64;
        let expected = (n - 1 - d as i64) - d as i64;
        prop_assert_eq!(rel.relative_target_depth(), expected);
        prop_assert_eq!(rel.relative_target_depth(), expected);
    }

    /// Property: reversal mirrors the index and negates the depth
    #[test]
    fn test_index_law((kinds, d) in path_and_index()) {
        let rel = build(&kinds, d);
        let rev = rel.reverse().unwrap();
        prop_assert_eq!(rev.common_parent_index(), kinds.len() - 1 - d);
        prop_assert_eq!(rev.relative_target_depth(), -rel.relative_target_depth());
    }

    /// Property: non-pivot kinds are the counterpart of the mirrored kind
    #[test]
    fn test_edge_kind_law((kinds, d) in path_and_index()) {
        let rel = build(&kinds, d);
        let rev = rel.reverse().unwrap();
        let n = kinds.len();
        let pivot = rev.common_parent_index();

        for i in 0..n {
            let mirrored = kinds[n - 1 - i];
            let expected = if i == pivot {
                mirrored
            } else {
                mirrored.symmetric_counterpart().unwrap()
            };
            prop_assert_eq!(rev.nodes()[i].kind, expected);
            prop_assert_eq!(rev.nodes()[i].synset, SynsetId::noun((n - 1 - i) as u64));
        }
    }

    /// Property: reversing twice gives back the original relationship
    #[test]
    fn test_double_reversal((kinds, d) in path_and_index()) {
        let rel = build(&kinds, d);
        let back = rel.reverse().unwrap().reverse().unwrap();
        prop_assert_eq!(back, rel);
    }

    /// Property: the original is unchanged and the ends are swapped
    #[test]
    fn test_reversal_is_independent((kinds, d) in path_and_index()) {
        let rel = build(&kinds, d);
        let snapshot = rel.nodes().clone();
        let rev = rel.reverse().unwrap();
        prop_assert_eq!(rel.nodes(), &snapshot);
        prop_assert_eq!(rev.source(), rel.target());
        prop_assert_eq!(rev.target(), rel.source());
    }

    /// Property: indices at or past the end are rejected
    #[test]
    fn test_out_of_range_rejected(len in 1usize..12, over in 0usize..5) {
        let nodes: PathNodeList = (0..len)
            .map(|i| PathNode::new(PointerKind::Hypernym, SynsetId::noun(i as u64)))
            .collect();
        let result = AsymmetricRelationship::new(
            PointerKind::Hypernym,
            nodes,
            len + over,
            SynsetId::noun(0),
            SynsetId::noun(len as u64 - 1),
        );
        let rejected = matches!(
            result,
            Err(lexipath::Error::InvalidDivergenceIndex { index, len: l })
                if index == (len + over) as i64 && l == len
        );
        prop_assert!(rejected);
    }
}
