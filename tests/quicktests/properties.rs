use std::collections::BTreeSet;

use quickcheck::quickcheck;

use intbst::{iterative, Key, Tree};

use crate::Op;

/// `ceil(log2(n + 1))`.
fn minimal_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

/// Checks the search invariant by walking the tree: an in-order walk of a valid tree is strictly
/// ascending.
fn is_search_tree(tree: &Tree) -> bool {
    let mut keys = Vec::new();
    tree.walk(|key| keys.push(key));
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

quickcheck! {
    fn add_keeps_invariant(xs: Vec<Key>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.add(*x);
        }

        is_search_tree(&tree)
    }

    fn second_add_is_a_no_op(xs: Vec<Key>, k: Key) -> bool {
        let mut tree: Tree = xs.into_iter().collect();
        tree.add(k);
        let before = tree.clone();

        tree.add(k).is_none() && tree == before
    }

    fn contains_not(xs: Vec<Key>, nots: Vec<Key>) -> bool {
        let tree: Tree = xs.iter().copied().collect();
        let added: BTreeSet<_> = xs.into_iter().collect();

        nots.iter()
            .filter(|x| !added.contains(x))
            .all(|x| tree.contains(*x).is_none() && iterative::contains(&tree, *x).is_none())
    }

    fn from_sorted_round_trips(xs: Vec<Key>) -> bool {
        let keys: Vec<Key> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        let tree = Tree::from_sorted(&keys);

        tree.iter().collect::<Vec<_>>() == keys
            && tree.height() <= minimal_height(keys.len())
            && keys.iter().all(|k| tree.contains(*k).is_some())
    }

    fn try_from_sorted_accepts_only_strictly_ascending(xs: Vec<Key>) -> bool {
        let ascending = xs.windows(2).all(|pair| pair[0] < pair[1]);

        Tree::try_from_sorted(&xs).is_ok() == ascending
    }

    fn range_search_matches_filter(ops: Vec<Op>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();
        for op in ops {
            match op {
                Op::Add(key) => {
                    iterative::add(&mut tree, key);
                    set.insert(key);
                }
                Op::Range(min, max) => {
                    let expected: Vec<Key> =
                        set.iter().copied().filter(|k| min <= *k && *k <= max).collect();
                    let mut found = Vec::new();
                    tree.range_search(min, max, &mut found);
                    if found != expected || tree.range(min, max).ne(expected.iter().copied()) {
                        return false;
                    }
                }
            }
        }
        true
    }
}
