use super::*;

use proptest::prelude::*;
use rand::prelude::*;
use std::collections::BTreeMap;

fn validate_tree<V>(tree: &RadixTree<V>) {
    let mut reachable = 0usize;
    let mut keys = 0usize;
    let mut stack = vec![tree.root];
    while let Some(id) = stack.pop() {
        reachable += 1;
        let node = tree.node(id);
        if node.is_key() {
            keys += 1;
        }

        if id == tree.root {
            assert!(node.label.is_empty(), "the root must not have an inbound edge");
            assert!(node.parent.is_none(), "the root must not have a parent");
            assert!(!node.is_key(), "no key may terminate at the root");
        } else {
            assert!(!node.label.is_empty(), "every edge must carry at least one byte");
            let parent = node.parent.expect("every non-root node must have a parent");
            let siblings = &tree.node(parent).children;
            assert!(
                siblings.contains(&id),
                "every node must be listed among its parent's children"
            );
            if node.label.len() > 1 {
                assert_eq!(
                    siblings.len(),
                    1,
                    "a multi-byte edge is only allowed below a single-child node"
                );
            }
            assert!(
                !(node.is_chain_link() && tree.node(parent).is_chain_link()),
                "two value-less single-child nodes must never be adjacent"
            );
            assert!(
                node.is_key() || !node.children.is_empty(),
                "a value-less leaf must have been pruned"
            );
        }

        let mut prev: Option<u8> = None;
        for &child in &node.children {
            let first = tree.node(child).first_byte();
            if let Some(prev) = prev {
                assert!(
                    prev < first,
                    "children must be sorted by distinct first bytes"
                );
            }
            prev = Some(first);
            assert_eq!(
                tree.node(child).parent,
                Some(id),
                "child's parent handle must point back at its parent"
            );
            stack.push(child);
        }
    }

    assert_eq!(keys, tree.len(), "reachable key count must match RadixTree::len");
    assert_eq!(
        reachable,
        tree.nodes.len(),
        "every allocated node must be reachable from the root"
    );
    assert_eq!(reachable - 1, tree.node_count(), "node_count must exclude the root");
}

#[derive(Clone, Debug)]
enum Op {
    Insert(Vec<u8>, u64),
    Remove(Vec<u8>),
    Get(Vec<u8>),
    Clear,
}

fn key_strategy() -> impl Strategy<Value = Vec<u8>> + Clone {
    // A four-letter alphabet makes shared prefixes, forks inside compressed
    // edges, and chain merges overwhelmingly likely within a few dozen
    // operations; the single-letter arm grows long chains of interior keys.
    prop_oneof![
        4 => prop::collection::vec(b'a'..=b'd', 1..=12),
        1 => prop::collection::vec(Just(b'a'), 1..=16),
    ]
}

fn ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        50 => (key.clone(), any::<u64>()).prop_map(|(k, v)| Op::Insert(k, v)),
        30 => key.clone().prop_map(Op::Remove),
        19 => key.prop_map(Op::Get),
        1 => Just(Op::Clear),
    ];
    prop::collection::vec(op, 0..=max_ops)
}

fn apply(tree: &mut RadixTree<u64>, model: &mut BTreeMap<Vec<u8>, u64>, op: Op) -> Result<(), TestCaseError> {
    match op {
        Op::Insert(key, value) => {
            let old_t = tree.insert(&key, value);
            let old_m = model.insert(key, value);
            prop_assert_eq!(old_t, old_m);
        }
        Op::Remove(key) => {
            let old_t = tree.remove(&key);
            let old_m = model.remove(key.as_slice());
            prop_assert_eq!(old_t, old_m);
        }
        Op::Get(key) => {
            let got_t = tree.get(&key).copied();
            let got_m = model.get(key.as_slice()).copied();
            prop_assert_eq!(got_t, got_m);
        }
        Op::Clear => {
            tree.clear();
            model.clear();
        }
    }
    prop_assert_eq!(tree.len(), model.len());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_matches_btreemap(ops in ops_strategy(500)) {
        let mut tree: RadixTree<u64> = RadixTree::new();
        let mut model: BTreeMap<Vec<u8>, u64> = BTreeMap::new();

        for op in ops {
            apply(&mut tree, &mut model, op)?;
        }

        validate_tree(&tree);
        let forward: Vec<(Vec<u8>, u64)> = tree.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(Vec<u8>, u64)> = model.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(forward, expected);

        let backward: Vec<(Vec<u8>, u64)> = tree.iter_rev().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(Vec<u8>, u64)> = model.iter().rev().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(backward, expected);
    }

    #[test]
    fn prop_invariants_hold_after_every_op(ops in ops_strategy(60)) {
        let mut tree: RadixTree<u64> = RadixTree::new();
        let mut model: BTreeMap<Vec<u8>, u64> = BTreeMap::new();

        for op in ops {
            apply(&mut tree, &mut model, op)?;
            validate_tree(&tree);
        }
    }

    #[test]
    fn prop_draining_all_keys_releases_all_nodes(keys in prop::collection::vec(key_strategy(), 0..=60)) {
        let mut tree: RadixTree<u64> = RadixTree::new();
        for key in &keys {
            tree.insert(key, 0);
        }
        for key in &keys {
            tree.remove(key);
        }
        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.node_count(), 0);
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn every_insertion_order_builds_the_same_tree() {
    let keys: Vec<Vec<u8>> = ["a", "ab", "abcd", "ad", "b"]
        .iter()
        .map(|key| key.as_bytes().to_vec())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();

    for_each_permutation(&keys, |order| {
        let mut tree = RadixTree::new();
        for key in &order {
            tree.insert(key, 0u8);
        }
        validate_tree(&tree);
        let iterated: Vec<Vec<u8>> = tree.iter().map(|(key, _)| key).collect();
        assert_eq!(iterated, sorted, "insertion order {order:?} broke iteration");
    });
}

#[test]
fn every_removal_order_drains_the_tree() {
    let keys: Vec<Vec<u8>> = ["a", "ab", "abcd", "ad", "b"]
        .iter()
        .map(|key| key.as_bytes().to_vec())
        .collect();

    for_each_permutation(&keys, |order| {
        let mut tree = RadixTree::new();
        for key in &keys {
            tree.insert(key, 0u8);
        }
        for key in &order {
            assert_eq!(tree.remove(key), Some(0), "removal order {order:?} lost a key");
            validate_tree(&tree);
        }
        assert_eq!(tree.node_count(), 0, "removal order {order:?} leaked nodes");
    });
}

#[test]
fn random_churn_against_btreemap() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut tree: RadixTree<u32> = RadixTree::new();
    let mut model: BTreeMap<Vec<u8>, u32> = BTreeMap::new();

    for round in 0..4_000u32 {
        let len = rng.random_range(1..=10);
        let key: Vec<u8> = (0..len).map(|_| rng.random_range(b'a'..=b'd')).collect();
        if rng.random_bool(0.6) {
            assert_eq!(tree.insert(&key, round), model.insert(key, round));
        } else {
            assert_eq!(tree.remove(&key), model.remove(&key));
        }
    }

    validate_tree(&tree);
    assert_eq!(tree.len(), model.len());
    let got: Vec<(Vec<u8>, u32)> = tree.iter().map(|(k, v)| (k, *v)).collect();
    let expected: Vec<(Vec<u8>, u32)> = model.iter().map(|(k, v)| (k.clone(), *v)).collect();
    assert_eq!(got, expected);

    for (key, value) in model {
        assert_eq!(tree.remove(&key), Some(value));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 0);
}
