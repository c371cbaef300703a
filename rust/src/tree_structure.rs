//! Tree structure management operations for BTree.
//!
//! This module contains the tree-level queries that describe the overall
//! shape: size, height, node counts, and clearing.

use tracing::debug;

use crate::types::{BTree, Node};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<K> BTree<K> {
    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the minimum degree `t` the tree was built with.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of levels: 0 for an empty tree, 1 for a lone leaf root.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.height())
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.node_count())
    }

    /// Clear all keys from the tree.
    pub fn clear(&mut self) {
        debug!(dropped = self.len, "clearing tree");
        self.root = None;
        self.len = 0;
    }
}

impl<K> Node<K> {
    /// Levels from this node down to its leaves. All leaves share a depth, so
    /// the leftmost path is as long as any other.
    pub(crate) fn height(&self) -> usize {
        let mut height = 1;
        let mut node = self;
        while let Some(child) = node.children.first() {
            node = child;
            height += 1;
        }
        height
    }

    /// Keys stored in this subtree.
    #[cfg(test)]
    pub(crate) fn key_count(&self) -> usize {
        self.keys.len() + self.children.iter().map(|child| child.key_count()).sum::<usize>()
    }

    /// Nodes in this subtree, this one included.
    pub(crate) fn node_count(&self) -> usize {
        1 + self.children.iter().map(|child| child.node_count()).sum::<usize>()
    }
}
