//! Core types and data structures for BTree.
//!
//! This module contains the tree, its nodes, the search result type, and the
//! constants shared by the rest of the implementation.

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest minimum degree a tree accepts. A degree of 1 would let nodes
/// hold zero keys and degenerates into a sorted list.
pub const MIN_DEGREE: usize = 2;

/// Largest minimum degree a tree accepts. Nodes are allocated at full size
/// up front, so this keeps a single node at `2 * MAX_DEGREE - 1` keys.
pub const MAX_DEGREE: usize = 1 << 16;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// B-tree of minimum degree `t` holding a set of ordered keys.
///
/// Every node other than the root holds between `t - 1` and `2t - 1` keys,
/// and every internal node has exactly one more child than it has keys.
/// Insertion splits full nodes on the way down and deletion tops up thin
/// nodes on the way down, so both finish in a single pass from the root.
///
/// # Type Parameters
///
/// * `K` - Key type that must implement `Ord`
///
/// # Examples
///
/// ```
/// use btree::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// for key in [10, 20, 5, 6, 12, 30, 7, 17] {
///     tree.insert(key);
/// }
///
/// assert!(tree.contains(&12));
/// assert_eq!(tree.len(), 8);
///
/// let keys: Vec<_> = tree.traverse().copied().collect();
/// assert_eq!(keys, [5, 6, 7, 10, 12, 17, 20, 30]);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(t log_t n)
/// - **Lookup**: O(log n), binary search inside each node
/// - **Deletion**: O(t log_t n)
/// - **Traversal**: O(n)
#[derive(Debug, Clone)]
pub struct BTree<K> {
    /// Minimum degree `t`, fixed at construction.
    pub(crate) degree: usize,
    /// Top node, `None` exactly when the tree holds no keys.
    pub(crate) root: Option<Box<Node<K>>>,
    /// Number of keys currently stored.
    pub(crate) len: usize,
}

/// A single tree node. Owns its children outright; there are no parent links.
#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    /// Minimum degree of the owning tree.
    pub(crate) degree: usize,
    /// Strictly increasing keys, at most `2t - 1` of them.
    pub(crate) keys: Vec<K>,
    /// `keys.len() + 1` children for internal nodes, empty for leaves.
    pub(crate) children: Vec<Box<Node<K>>>,
    pub(crate) is_leaf: bool,
}

// ============================================================================
// SEARCH RESULT
// ============================================================================

/// Where a key was found: the child indices followed from the root, and the
/// slot inside the final node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location<'a, K> {
    pub(crate) key: &'a K,
    pub(crate) path: Vec<usize>,
    pub(crate) index: usize,
}

impl<'a, K> Location<'a, K> {
    /// The stored key equal to the one searched for.
    pub fn key(&self) -> &'a K {
        self.key
    }

    /// Child indices taken from the root down to the node holding the key.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Position of the key within its node.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Depth of the node holding the key; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}
