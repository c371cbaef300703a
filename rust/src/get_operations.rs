//! GET operations for BTree.
//!
//! This module contains the read-only lookups: point search, membership, and
//! the smallest and largest keys.

use crate::types::{BTree, Location};

impl<K: Ord> BTree<K> {
    /// Find `key` and report where it is stored.
    ///
    /// Starting at the root, each node is binary searched for the first key
    /// not less than `key`. An equal key ends the search; otherwise it
    /// continues in the child just before that position, until a leaf rules
    /// the key out.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.extend([10, 20, 30, 40]);
    ///
    /// let hit = tree.search(&40).unwrap();
    /// assert_eq!(hit.key(), &40);
    /// assert_eq!(hit.path(), &[1]);
    /// assert_eq!(hit.depth(), 1);
    /// assert!(tree.search(&25).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<Location<'_, K>> {
        let mut node = self.root.as_deref()?;
        let mut path = Vec::new();

        loop {
            let index = node.find_key(key);
            if let Some(stored) = node.keys.get(index).filter(|stored| *stored == key) {
                return Some(Location {
                    key: stored,
                    path,
                    index,
                });
            }
            if node.is_leaf {
                return None;
            }
            path.push(index);
            node = &node.children[index];
        }
    }

    /// Get a reference to the stored key equal to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.search(key).map(|location| location.key())
    }

    /// Check if key exists in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Returns the smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        self.root.as_ref()?.first_key()
    }

    /// Returns the largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        self.root.as_ref()?.last_key()
    }
}
