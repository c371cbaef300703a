//! Node implementation for BTree.
//!
//! This module holds the structural primitives every mutation is built from:
//! splitting a full child, lending a key between siblings, merging two thin
//! siblings, and topping up a child before descending into it.

use std::mem;

use tracing::trace;

use crate::types::Node;

impl<K: Ord> Node<K> {
    // ============================================================================
    // STATUS CHECKS
    // ============================================================================

    /// Largest number of keys any node may hold: `2t - 1`.
    pub(crate) fn max_keys(&self) -> usize {
        2 * self.degree - 1
    }

    /// Smallest number of keys a non-root node may hold: `t - 1`.
    pub(crate) fn min_keys(&self) -> usize {
        self.degree - 1
    }

    /// Returns the number of keys in this node.
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this node must be split before anything descends into it.
    pub(crate) fn is_full(&self) -> bool {
        self.keys.len() == self.max_keys()
    }

    /// Returns true if this node can give up a key and stay within bounds.
    pub(crate) fn can_lend(&self) -> bool {
        self.keys.len() > self.min_keys()
    }

    /// Index of the first key not less than `key`, or `len()` if there is none.
    pub(crate) fn find_key(&self, key: &K) -> usize {
        match self.keys.binary_search(key) {
            Ok(index) => index,
            Err(index) => index,
        }
    }

    // ============================================================================
    // EXTREMES
    // ============================================================================

    /// Smallest key in this subtree: the first key of its leftmost leaf.
    pub(crate) fn first_key(&self) -> Option<&K> {
        let mut node = self;
        while !node.is_leaf {
            node = node.children.first()?;
        }
        node.keys.first()
    }

    /// Largest key in this subtree: the last key of its rightmost leaf.
    pub(crate) fn last_key(&self) -> Option<&K> {
        let mut node = self;
        while !node.is_leaf {
            node = node.children.last()?;
        }
        node.keys.last()
    }

    // ============================================================================
    // SPLITTING
    // ============================================================================

    /// Split the full child at `index` around its median.
    ///
    /// The upper `t - 1` keys (and upper `t` children) move into a new right
    /// sibling, the median moves up into this node at `index`, and the
    /// sibling is linked in as child `index + 1`. This node must not be full.
    pub(crate) fn split_child(&mut self, index: usize) {
        let degree = self.degree;
        debug_assert!(!self.is_full(), "splitting into a full parent");

        let child = &mut self.children[index];
        debug_assert!(child.is_full(), "split_child on a child that is not full");

        let mut sibling = Node::new(degree, child.is_leaf);
        sibling.keys.extend(child.keys.drain(degree..));
        if !child.is_leaf {
            sibling.children.extend(child.children.drain(degree..));
        }
        let median = child.keys.remove(degree - 1);

        self.keys.insert(index, median);
        self.children.insert(index + 1, Box::new(sibling));
        trace!(index, degree, "split child");
    }

    // ============================================================================
    // REBALANCING BEFORE DESCENT
    // ============================================================================

    /// Make sure the child at `index` holds at least `t` keys.
    ///
    /// Borrowing is tried first, left sibling before right, and merging only
    /// when neither sibling can lend. Returns the index of the child that now
    /// covers the requested child's key range: `index - 1` when the child was
    /// the last one and got merged into its left sibling, `index` otherwise.
    pub(crate) fn fill(&mut self, index: usize) -> usize {
        let last = self.keys.len();
        if index != 0 && self.children[index - 1].can_lend() {
            self.borrow_from_prev(index);
            index
        } else if index != last && self.children[index + 1].can_lend() {
            self.borrow_from_next(index);
            index
        } else if index != last {
            self.merge(index);
            index
        } else {
            self.merge(index - 1);
            index - 1
        }
    }

    /// Rotate one key from the left sibling of child `index`, through the
    /// separator, into the front of the child.
    pub(crate) fn borrow_from_prev(&mut self, index: usize) {
        let (before, after) = self.children.split_at_mut(index);
        let sibling = &mut before[index - 1];
        let child = &mut after[0];
        debug_assert!(sibling.can_lend());

        let raised = sibling.keys.remove(sibling.keys.len() - 1);
        let lowered = mem::replace(&mut self.keys[index - 1], raised);
        child.keys.insert(0, lowered);

        if !child.is_leaf {
            let moved = sibling.children.remove(sibling.children.len() - 1);
            child.children.insert(0, moved);
        }
        trace!(index, "borrowed from previous sibling");
    }

    /// Rotate one key from the right sibling of child `index`, through the
    /// separator, onto the end of the child.
    pub(crate) fn borrow_from_next(&mut self, index: usize) {
        let (through, after) = self.children.split_at_mut(index + 1);
        let child = &mut through[index];
        let sibling = &mut after[0];
        debug_assert!(sibling.can_lend());

        let raised = sibling.keys.remove(0);
        let lowered = mem::replace(&mut self.keys[index], raised);
        child.keys.push(lowered);

        if !child.is_leaf {
            child.children.push(sibling.children.remove(0));
        }
        trace!(index, "borrowed from next sibling");
    }

    // ============================================================================
    // MERGING
    // ============================================================================

    /// Fold separator `index` and child `index + 1` into child `index`.
    ///
    /// Both children hold `t - 1` keys, so the survivor ends up with exactly
    /// `2t - 1`. The right child is dropped.
    pub(crate) fn merge(&mut self, index: usize) {
        let separator = self.keys.remove(index);
        let mut right = self.children.remove(index + 1);

        let left = &mut self.children[index];
        left.keys.push(separator);
        left.keys.append(&mut right.keys);
        left.children.append(&mut right.children);
        debug_assert!(left.keys.len() <= left.max_keys(), "merge overflowed a node");
        trace!(index, "merged children");
    }
}
