//! Iterator implementations for BTree.
//!
//! In-order traversal is lazy: the iterator keeps an explicit stack of the
//! nodes on the path to the next key instead of recursing, so each call to
//! `next` does O(1) amortised work.

use std::iter::FusedIterator;

use crate::types::{BTree, Node};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Iterator over the keys of a [`BTree`] in ascending order.
pub struct Iter<'a, K> {
    /// Nodes from the root down to the current leaf, each with the index of
    /// the next key to yield from it.
    stack: Vec<(&'a Node<K>, usize)>,
    remaining: usize,
}

// ============================================================================
// BTREE ITERATOR METHODS
// ============================================================================

impl<K> BTree<K> {
    /// Returns a lazy in-order iterator over all keys.
    ///
    /// The traversal is finite and can be restarted by calling this again.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.extend([3, 1, 2]);
    /// assert_eq!(tree.traverse().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn traverse(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// Alias for [`traverse`](Self::traverse).
    pub fn iter(&self) -> Iter<'_, K> {
        self.traverse()
    }
}

// ============================================================================
// ITER IMPLEMENTATION
// ============================================================================

impl<'a, K> Iter<'a, K> {
    fn new(tree: &'a BTree<K>) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(tree.height()),
            remaining: tree.len,
        };
        if let Some(root) = tree.root.as_deref() {
            iter.descend_leftmost(root);
        }
        iter
    }

    /// Push `node` and every first child below it.
    fn descend_leftmost(&mut self, mut node: &'a Node<K>) {
        loop {
            self.stack.push((node, 0));
            match node.children.first() {
                Some(child) => node = child,
                None => return,
            }
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, index) = self.stack.last_mut()?;
            let node: &'a Node<K> = *node;
            let position = *index;

            if position < node.keys.len() {
                *index += 1;
                // Everything between this key and the next lives in the child
                // to its right.
                if let Some(child) = node.children.get(position + 1) {
                    self.descend_leftmost(child);
                }
                self.remaining -= 1;
                return Some(&node.keys[position]);
            }
            self.stack.pop();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<'a, K> IntoIterator for &'a BTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

impl<K: Ord> Extend<K> for BTree<K> {
    /// Insert every key, skipping any already present.
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
