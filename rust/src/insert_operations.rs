//! INSERT operations for BTree.
//!
//! Insertion is a single top-down pass. The root is split before it is
//! entered if it is full, and every child is split before it is entered if it
//! is full, so the key always lands in a leaf with room to spare.

use tracing::debug;

use crate::error::{BTreeError, ModifyResult};
use crate::types::{BTree, Node};

impl<K: Ord> BTree<K> {
    /// Insert a key into the tree.
    ///
    /// Duplicates are rejected: if an equal key is already stored, the tree is
    /// left exactly as it was and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// assert!(tree.insert(7));
    /// assert!(!tree.insert(7));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        if self.contains(&key) {
            return false;
        }

        let mut root = match self.root.take() {
            Some(root) if root.is_full() => self.grow(root),
            Some(root) => root,
            None => Box::new(Node::new(self.degree, true)),
        };
        root.insert_non_full(key);
        self.root = Some(root);
        self.len += 1;
        true
    }

    /// Insert a key, failing with `DuplicateKey` if it is already present.
    ///
    /// The whole tree is validated afterwards, which makes this O(n); it is
    /// meant for tests and debugging rather than hot paths.
    pub fn try_insert(&mut self, key: K) -> ModifyResult<()> {
        if !self.insert(key) {
            return Err(BTreeError::DuplicateKey);
        }
        self.validate_for_operation("insert")
    }

    /// Put a fresh root above the full `old_root` and split it, growing the
    /// tree by one level.
    fn grow(&self, old_root: Box<Node<K>>) -> Box<Node<K>> {
        let mut new_root = Node::new(self.degree, false);
        new_root.children.push(old_root);
        new_root.split_child(0);
        debug!(
            degree = self.degree,
            height = new_root.height(),
            "root split, tree grew"
        );
        Box::new(new_root)
    }
}

impl<K: Ord> Node<K> {
    /// Insert `key` into the subtree rooted here. This node must not be full.
    pub(crate) fn insert_non_full(&mut self, key: K) {
        debug_assert!(!self.is_full(), "insert_non_full on a full node");

        let mut index = self.find_key(&key);
        if self.is_leaf {
            self.keys.insert(index, key);
            return;
        }

        if self.children[index].is_full() {
            self.split_child(index);
            if self.keys[index] < key {
                index += 1;
            }
        }
        self.children[index].insert_non_full(key);
    }
}
