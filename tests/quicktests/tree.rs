use bintree::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                bst.remove(x);
                set.remove(x);
            }
        }
    }
}

/// Whether every value is strictly greater than the one before it.
fn strictly_ascending<T: Ord>(values: &[&T]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.in_order_traverse() == set.iter().collect::<Vec<_>>()
    }

    fn in_order_is_sorted(ops: Vec<Op<i16>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        strictly_ascending(&tree.in_order_traverse())
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.search(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.search(x) && tree.search_node(x).is_none())
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        // We may have inserted the same value multiple times - delete each one.
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| !tree.search(x))
            && still_present.iter().all(|x| tree.search(x))
    }

    fn duplicate_insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        tree.insert(x);
        let before: Vec<i8> = tree.iter().copied().collect();
        tree.insert(x);

        tree.iter().copied().collect::<Vec<_>>() == before
    }

    fn removing_everything_empties(xs: Vec<i8>, seed: Vec<bool>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();

        // Remove in an order unrelated to insertion: the flags pick whether the
        // next value comes from the front or the back.
        let mut remaining = xs;
        let mut flags = seed.into_iter().cycle();
        while !remaining.is_empty() {
            let x = if flags.next().unwrap_or(false) {
                remaining.remove(0)
            } else {
                remaining.pop().unwrap()
            };
            tree.remove(&x);
        }

        tree.is_empty()
    }

    fn depth_first_matches_pre_order(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();

        tree.depth_first_search() == tree.pre_order_traverse()
    }

    fn traversals_visit_every_value(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let expected: BTreeSet<_> = xs.iter().collect();

        [
            tree.pre_order_traverse(),
            tree.post_order_traverse(),
            tree.breadth_first_search(),
        ]
        .iter()
        .all(|values| {
            values.len() == expected.len()
                && values.iter().copied().collect::<BTreeSet<_>>() == expected
        })
    }

    fn descending_comparator_reverses(xs: Vec<i8>) -> bool {
        let mut ascending = Tree::new();
        let mut descending = Tree::with_comparator(|a: &i8, b: &i8| b.cmp(a));
        ascending.extend(xs.iter().copied());
        descending.extend(xs.iter().copied());

        let mut reversed = descending.in_order_traverse();
        reversed.reverse();
        ascending.in_order_traverse() == reversed
    }
}
