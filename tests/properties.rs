//! Property tests for the fold algorithm and renderers.

use pathtree::{Node, PathTree};
use proptest::collection::vec;
use proptest::prelude::*;

/// Paths of one to five short lowercase segments.
fn path_strategy() -> impl Strategy<Value = String> {
    vec("[a-z]{1,3}", 1..=5).prop_map(|segments| segments.join("/"))
}

proptest! {
    #[test]
    fn pretty_is_referentially_transparent(paths in vec(path_strategy(), 0..20)) {
        let first = PathTree::from_paths(paths.clone()).unwrap().pretty();
        let second = PathTree::from_paths(paths).unwrap().pretty();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_inserted_path_is_walkable(paths in vec(path_strategy(), 1..20)) {
        let tree = PathTree::from_paths(paths.clone()).unwrap();
        for path in &paths {
            let node = tree.get(path);
            prop_assert!(node.is_some(), "path {:?} not reachable", path);
            let last = path.rsplit('/').next().unwrap();
            prop_assert_eq!(node.unwrap().label(), last);
        }
    }

    #[test]
    fn duplicate_insertion_is_idempotent(path in path_strategy()) {
        let once = PathTree::from_paths([path.clone()]).unwrap();
        let twice = PathTree::from_paths([path.clone(), path]).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn input_order_never_changes_the_structure(paths in vec(path_strategy(), 0..20)) {
        let forward = PathTree::from_paths(paths.clone()).unwrap();
        let mut reversed = paths;
        reversed.reverse();
        prop_assert_eq!(forward, PathTree::from_paths(reversed).unwrap());
    }

    #[test]
    fn pretty_emits_one_line_per_node_plus_root(paths in vec(path_strategy(), 1..20)) {
        let tree = PathTree::from_paths(paths).unwrap();
        let lines = tree.pretty().lines().count();
        prop_assert_eq!(lines, tree.node_count() + 1);
    }

    #[test]
    fn sibling_records_are_sorted_at_every_level(paths in vec(path_strategy(), 0..20)) {
        let tree = PathTree::from_paths(paths).unwrap();
        assert_sorted(tree.root());
    }

    #[test]
    fn last_duplicate_identifier_wins(path in path_strategy(), a in 0u32..100, b in 0u32..100) {
        let tree = PathTree::from_tagged_paths([
            (path.clone(), serde_json::json!(a)),
            (path.clone(), serde_json::json!(b)),
        ])
        .unwrap();
        let leaf = tree.get(&path).unwrap();
        prop_assert_eq!(leaf.metadata().get("id"), Some(&serde_json::json!(b)));
    }
}

fn assert_sorted(node: &Node) {
    let labels: Vec<&str> = node.children().map(Node::label).collect();
    let mut sorted = labels.clone();
    sorted.sort_unstable();
    assert_eq!(labels, sorted);
    for child in node.children() {
        assert_sorted(child);
    }
}
