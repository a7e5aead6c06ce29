use llrb::map::Tree;

use std::collections::{BTreeMap, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeMap`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops<K, V>(ops: &[Op<K, V>], tree: &mut Tree<K, V>, model: &mut BTreeMap<K, V>)
where
    K: Ord + Clone + std::fmt::Debug,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                assert_eq!(tree.insert(k.clone(), v.clone()), model.insert(k.clone(), v.clone()));
            }
            Op::Remove(k) => {
                assert_eq!(tree.delete(k), model.remove(k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut model);
    model.keys().all(|key| tree.get(key) == model.get(key))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }

    xs.iter().all(|x| tree.get(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.get(x) == None)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    for delete in &deletes {
        tree.delete(delete);
        // A second delete of the same key is a no-op.
        assert_eq!(tree.delete(delete), None);
    }

    let deleted: HashSet<_> = deletes.iter().collect();
    deletes.iter().all(|x| tree.get(x).is_none())
        && xs
            .iter()
            .filter(|x| !deleted.contains(x))
            .all(|x| tree.get(x) == Some(x))
}

#[quickcheck]
fn sorted_enumeration(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, ());
    }

    let mut expected: Vec<i8> = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.len() == expected.len() && tree.keys() == expected.iter().collect::<Vec<_>>()
}

#[quickcheck]
fn min_max_agree_with_enumeration(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, ());
    }

    let keys = tree.keys();
    tree.min() == keys.first().copied() && tree.max() == keys.last().copied()
}

#[quickcheck]
fn rank_select_inverse(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, ());
    }

    (0..tree.len()).all(|i| tree.rank(tree.select(i).unwrap()) == i)
}

#[quickcheck]
fn drain_min_yields_sorted_keys(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, ());
    }

    let mut drained = Vec::new();
    while let Some((key, ())) = tree.delete_min() {
        drained.push(key);
    }

    let mut expected: Vec<i8> = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.is_empty() && drained == expected
}

#[quickcheck]
fn height_stays_logarithmic(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, ());
    }

    // The red-black height bound: 2 lg (n + 1).
    tree.height() as f64 <= 2.0 * ((tree.len() + 1) as f64).log2()
}
