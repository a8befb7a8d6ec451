use ordered_tree::{Tree, TreeError};

use std::collections::{HashMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a hashmap.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<K, V>, map: &mut HashMap<K, V>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                if bst.insert(k.clone(), v.clone()).is_ok() {
                    map.insert(k.clone(), v.clone());
                }
            }
            Op::Remove(k) => {
                assert_eq!(bst.delete(k).ok(), map.remove(k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.len() == map.len() && map.keys().all(|key| tree.search(key).ok() == map.get(key))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        let _ = tree.insert(*x, *x);
    }

    xs.iter().all(|x| tree.search(x) == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        let _ = tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_err())
}

#[quickcheck]
fn first_insert_wins(xs: Vec<(i8, u16)>) -> bool {
    let mut tree = Tree::new();
    let mut first = HashMap::new();
    for (k, v) in &xs {
        let expected = if first.contains_key(k) {
            Err(TreeError::AlreadyExists)
        } else {
            first.insert(*k, *v);
            Ok(())
        };
        if tree.insert(*k, *v) != expected {
            return false;
        }
    }

    first.iter().all(|(k, v)| tree.search(k) == Ok(v))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8, ()> = Tree::new();
    for x in &xs {
        let _ = tree.insert_key(*x);
    }
    for delete in &deletes {
        let _ = tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.search(x).is_err())
        && still_present.iter().all(|x| tree.search(x).is_ok())
}

#[quickcheck]
fn traversals_are_sorted_sets(xs: Vec<i16>) -> bool {
    let mut tree: Tree<i16, ()> = Tree::new();
    for x in &xs {
        let _ = tree.insert_key(*x);
    }

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.keys().copied().eq(expected.iter().copied())
        && tree.iter_rev().map(|(k, _)| *k).eq(expected.iter().rev().copied())
}

#[quickcheck]
fn min_max_match_sorted(xs: Vec<i16>) -> bool {
    let mut tree: Tree<i16, ()> = Tree::new();
    for x in &xs {
        let _ = tree.insert_key(*x);
    }

    match (xs.iter().min(), xs.iter().max()) {
        (Some(min), Some(max)) => {
            tree.minimum().map(|(k, _)| k) == Ok(min) && tree.maximum().map(|(k, _)| k) == Ok(max)
        }
        _ => {
            tree.minimum() == Err(TreeError::EmptyTree)
                && tree.maximum() == Err(TreeError::EmptyTree)
        }
    }
}
