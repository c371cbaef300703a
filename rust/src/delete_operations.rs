//! DELETE operations for BTree.
//!
//! Deletion is a single top-down pass. Before descending into a child, the
//! child is topped up to at least `t` keys, so whatever is removed below it
//! can never leave it short. The only repair left for the tree itself is
//! dropping a root that ran out of keys.

use std::mem;

use tracing::debug;

use crate::error::{BTreeError, ModifyResult};
use crate::types::{BTree, Node};

impl<K: Ord> BTree<K> {
    /// Remove a key from the tree.
    ///
    /// Returns `true` if the key was present. Removing an absent key is a
    /// no-op that leaves the tree's shape untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.insert(42);
    /// assert!(tree.remove(&42));
    /// assert!(!tree.remove(&42));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Remove a key and hand back the stored key that compared equal to it.
    pub fn take(&mut self, key: &K) -> Option<K> {
        // Descending rebalances along the way, so an absent key must not get
        // that far.
        if !self.contains(key) {
            return None;
        }
        let removed = self.root.as_mut()?.remove(key);
        self.finish_removal(removed.is_some());
        removed
    }

    /// Remove a key, failing with `KeyNotFound` if it is absent.
    ///
    /// The whole tree is validated afterwards, which makes this O(n); it is
    /// meant for tests and debugging rather than hot paths.
    pub fn try_remove(&mut self, key: &K) -> ModifyResult<K> {
        let removed = self.take(key).ok_or(BTreeError::KeyNotFound)?;
        self.validate_for_operation("remove")?;
        Ok(removed)
    }

    /// Remove and return the smallest key.
    pub fn pop_first(&mut self) -> Option<K> {
        let removed = self.root.as_mut()?.remove_first();
        self.finish_removal(removed.is_some());
        removed
    }

    /// Remove and return the largest key.
    pub fn pop_last(&mut self) -> Option<K> {
        let removed = self.root.as_mut()?.remove_last();
        self.finish_removal(removed.is_some());
        removed
    }

    fn finish_removal(&mut self, removed: bool) {
        if removed {
            self.len -= 1;
        }
        self.collapse_root_if_needed();
    }

    /// Drop a root left without keys: an empty leaf root empties the tree,
    /// an empty internal root hands over to its only child.
    fn collapse_root_if_needed(&mut self) {
        self.root = match self.root.take() {
            Some(mut root) if root.keys.is_empty() => {
                if root.is_leaf {
                    debug!("last key removed, tree is empty");
                    None
                } else {
                    let child = root.children.pop();
                    debug!(
                        height = child.as_ref().map_or(0, |c| c.height()),
                        "root demoted, tree shrank"
                    );
                    child
                }
            }
            other => other,
        };
    }
}

impl<K: Ord> Node<K> {
    /// Remove `key` from the subtree rooted here.
    ///
    /// Unless this node is the root, it holds at least `t` keys on entry.
    pub(crate) fn remove(&mut self, key: &K) -> Option<K> {
        let index = self.find_key(key);
        let found = index < self.keys.len() && self.keys[index] == *key;

        if found {
            if self.is_leaf {
                Some(self.remove_from_leaf(index))
            } else {
                self.remove_from_non_leaf(index, key)
            }
        } else if self.is_leaf {
            None
        } else {
            let index = if self.children[index].len() < self.degree {
                self.fill(index)
            } else {
                index
            };
            self.children[index].remove(key)
        }
    }

    fn remove_from_leaf(&mut self, index: usize) -> K {
        self.keys.remove(index)
    }

    /// Remove `keys[index]` from an internal node.
    ///
    /// The key is replaced by its in-order predecessor or successor when the
    /// child on that side has a key to spare; otherwise both neighbouring
    /// children are merged around it and the removal continues in the merge.
    fn remove_from_non_leaf(&mut self, index: usize, key: &K) -> Option<K> {
        if self.children[index].len() >= self.degree {
            let predecessor = self.children[index].remove_last()?;
            Some(mem::replace(&mut self.keys[index], predecessor))
        } else if self.children[index + 1].len() >= self.degree {
            let successor = self.children[index + 1].remove_first()?;
            Some(mem::replace(&mut self.keys[index], successor))
        } else {
            self.merge(index);
            self.children[index].remove(key)
        }
    }

    /// Remove the smallest key of this subtree, topping up the leftmost
    /// child before each descent.
    pub(crate) fn remove_first(&mut self) -> Option<K> {
        if self.is_leaf {
            return (!self.keys.is_empty()).then(|| self.keys.remove(0));
        }
        let index = if self.children[0].len() < self.degree {
            self.fill(0)
        } else {
            0
        };
        self.children[index].remove_first()
    }

    /// Remove the largest key of this subtree, topping up the rightmost
    /// child before each descent.
    pub(crate) fn remove_last(&mut self) -> Option<K> {
        if self.is_leaf {
            return self.keys.pop();
        }
        let last = self.keys.len();
        let index = if self.children[last].len() < self.degree {
            self.fill(last)
        } else {
            last
        };
        self.children[index].remove_last()
    }
}
