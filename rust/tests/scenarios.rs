use btree::{BTree, BTreeError, MAX_DEGREE};
use paste::paste;

#[test]
fn test_two_three_four_tree_build_and_shrink() {
    let mut tree = BTree::new(2).unwrap();
    let mut heights = Vec::new();
    for key in [10, 20, 5, 6, 12, 30, 7, 17] {
        assert!(tree.insert(key));
        heights.push(tree.height());
    }

    // The root is split before a fourth key is placed into it, and again
    // (one level down) before 17 enters the full [12, 20, 30] leaf.
    assert_eq!(heights, vec![1, 1, 1, 2, 2, 2, 2, 2]);
    assert_eq!(
        tree.levels(),
        vec![
            vec![vec![10, 20]],
            vec![vec![5, 6, 7], vec![12, 17], vec![30]],
        ]
    );
    assert_eq!(
        tree.traverse().copied().collect::<Vec<_>>(),
        vec![5, 6, 7, 10, 12, 17, 20, 30]
    );

    assert!(tree.remove(&6));
    let after_six = tree.levels();
    assert_eq!(
        after_six,
        vec![
            vec![vec![10, 20]],
            vec![vec![5, 7], vec![12, 17], vec![30]],
        ]
    );

    assert!(!tree.remove(&13));
    assert_eq!(tree.levels(), after_six);
    assert_eq!(
        tree.traverse().copied().collect::<Vec<_>>(),
        vec![5, 7, 10, 12, 17, 20, 30]
    );
}

#[test]
fn test_singleton_tree_round_trip() {
    let mut tree = BTree::new(2).unwrap();
    tree.insert(42);

    assert!(tree.remove(&42));
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert!(tree.search(&42).is_none());

    assert!(tree.insert(42));
    assert_eq!(tree.levels(), vec![vec![vec![42]]]);
    assert_eq!(tree.search(&42).map(|hit| hit.depth()), Some(0));
}

#[test]
fn test_remove_from_empty_tree_is_noop() {
    let mut tree = BTree::<i32>::new(3).unwrap();
    assert!(!tree.remove(&1));
    assert_eq!(tree.try_remove(&1), Err(BTreeError::KeyNotFound));
    assert!(tree.is_empty());
}

#[test]
fn test_invalid_degrees_are_rejected() {
    assert_eq!(
        BTree::<i32>::new(1).unwrap_err(),
        BTreeError::InvalidDegree { degree: 1, min: 2 }
    );
    assert!(BTree::<i32>::new(0).is_err());
}

#[test]
fn test_oversized_degree_is_rejected_before_any_insert() {
    assert_eq!(
        BTree::<u8>::new(usize::MAX).unwrap_err(),
        BTreeError::DegreeTooLarge {
            degree: usize::MAX,
            max: MAX_DEGREE,
        }
    );
    assert!(BTree::<u64>::new(MAX_DEGREE + 1).is_err());

    let mut widest = BTree::<u64>::new(MAX_DEGREE).unwrap();
    widest.extend(0..1000);
    assert_eq!(widest.height(), 1);
    assert_eq!(widest.len(), 1000);
}

fn assert_root_is_never_empty<K: Ord + Clone>(tree: &BTree<K>) {
    if let Some(root_level) = tree.levels().first() {
        assert_eq!(root_level.len(), 1);
        assert!(!root_level[0].is_empty(), "root left with no keys");
    }
}

fn ascending_insert_then_drain(degree: usize) {
    let mut tree = BTree::new(degree).unwrap();
    for key in 0..500 {
        tree.insert(key);
    }
    tree.validate().unwrap();

    for key in 0..500 {
        assert!(tree.remove(&key), "missing {}", key);
        tree.validate().unwrap();
        assert_root_is_never_empty(&tree);
    }
    assert!(tree.is_empty());
}

fn descending_insert_then_drain_from_top(degree: usize) {
    let mut tree = BTree::new(degree).unwrap();
    for key in (0..500).rev() {
        tree.insert(key);
    }
    tree.validate().unwrap();

    for key in (0..500).rev() {
        assert!(tree.remove(&key), "missing {}", key);
        tree.validate().unwrap();
        assert_root_is_never_empty(&tree);
    }
    assert!(tree.is_empty());
}

fn interleaved_removal_from_the_middle(degree: usize) {
    let mut tree = BTree::new(degree).unwrap();
    // Multiplying by a unit modulo 1009 scatters the insertion order.
    tree.extend((0..1009u32).map(|i| (i * 389) % 1009));
    assert_eq!(tree.len(), 1009);

    for key in (0..1009u32).filter(|k| k % 3 == 1) {
        assert!(tree.remove(&key));
    }
    tree.validate().unwrap();

    let expected: Vec<u32> = (0..1009).filter(|k| k % 3 != 1).collect();
    assert_eq!(tree.traverse().copied().collect::<Vec<_>>(), expected);

    for key in &expected {
        assert!(tree.contains(key));
    }
    for key in (0..1009u32).filter(|k| k % 3 == 1) {
        assert!(tree.search(&key).is_none());
    }
}

macro_rules! degree_suite {
    ($($degree:literal),*) => {
        $(
            paste! {
                #[test]
                fn [<test_ascending_insert_then_drain_degree_ $degree>]() {
                    ascending_insert_then_drain($degree);
                }

                #[test]
                fn [<test_descending_insert_then_drain_degree_ $degree>]() {
                    descending_insert_then_drain_from_top($degree);
                }

                #[test]
                fn [<test_interleaved_removal_degree_ $degree>]() {
                    interleaved_removal_from_the_middle($degree);
                }
            }
        )*
    };
}

degree_suite!(2, 3, 4, 7);
