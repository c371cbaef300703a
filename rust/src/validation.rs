//! Validation and debugging utilities for BTree.
//!
//! This module contains invariant checking and the structural snapshots used
//! by tests to pin down the exact shape a sequence of operations produces.

use std::collections::VecDeque;

use crate::error::{BTreeError, BTreeResult};
use crate::types::{BTree, Node};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord> BTree<K> {
    /// Check if the tree maintains B-tree invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies that keys are strictly ascending and respect the separators
    /// above them, that every node is within its key bounds, that internal
    /// nodes have one more child than keys, that all leaves sit at the same
    /// depth, and that the key counter matches the stored keys.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        let Some(root) = self.root.as_deref() else {
            return if self.len == 0 {
                Ok(())
            } else {
                Err(format!("Empty tree reports {} keys", self.len))
            };
        };

        let mut leaf_depth = None;
        let counted = self.check_node(root, None, None, 0, &mut leaf_depth)?;
        if counted != self.len {
            return Err(format!(
                "Tree holds {} keys but reports {}",
                counted, self.len
            ));
        }
        Ok(())
    }

    /// Check every invariant, reporting the first violation found as a
    /// message naming the depth where it occurs.
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Recursively check one node and its subtree, returning its key count.
    fn check_node(
        &self,
        node: &Node<K>,
        lower: Option<&K>,
        upper: Option<&K>,
        depth: usize,
        leaf_depth: &mut Option<usize>,
    ) -> Result<usize, String> {
        if node.degree != self.degree {
            return Err(format!(
                "Node at depth {} has degree {}, tree has {}",
                depth, node.degree, self.degree
            ));
        }

        let size = node.keys.len();
        if size > node.max_keys() {
            return Err(format!(
                "Node at depth {} holds {} keys, more than {}",
                depth,
                size,
                node.max_keys()
            ));
        }
        if depth == 0 && size == 0 {
            return Err("Root node holds no keys".to_string());
        }
        if depth > 0 && size < node.min_keys() {
            return Err(format!(
                "Node at depth {} holds {} keys, fewer than {}",
                depth,
                size,
                node.min_keys()
            ));
        }

        for i in 1..size {
            if node.keys[i - 1] >= node.keys[i] {
                return Err(format!("Keys out of order at depth {} index {}", depth, i));
            }
        }
        if let (Some(lower), Some(first)) = (lower, node.keys.first()) {
            if first <= lower {
                return Err(format!("Key at depth {} falls below its separator", depth));
            }
        }
        if let (Some(upper), Some(last)) = (upper, node.keys.last()) {
            if last >= upper {
                return Err(format!("Key at depth {} falls above its separator", depth));
            }
        }

        if node.is_leaf {
            if !node.children.is_empty() {
                return Err(format!("Leaf at depth {} has children", depth));
            }
            match *leaf_depth {
                None => *leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(format!(
                        "Leaf at depth {} but other leaves are at depth {}",
                        depth, expected
                    ));
                }
                Some(_) => {}
            }
            return Ok(size);
        }

        if node.children.len() != size + 1 {
            return Err(format!(
                "Internal node at depth {} has {} keys but {} children",
                depth,
                size,
                node.children.len()
            ));
        }

        let mut total = size;
        for (i, child) in node.children.iter().enumerate() {
            let child_lower = if i == 0 { lower } else { node.keys.get(i - 1) };
            let child_upper = if i == size { upper } else { node.keys.get(i) };
            total += self.check_node(child, child_lower, child_upper, depth + 1, leaf_depth)?;
        }
        Ok(total)
    }

    // ============================================================================
    // VALIDATION HELPERS FOR OPERATIONS
    // ============================================================================

    /// Check the tree is valid after `operation`, as a typed error.
    pub fn validate_for_operation(&self, operation: &str) -> BTreeResult<()> {
        self.check_invariants_detailed()
            .map_err(|e| BTreeError::data_integrity(operation, &e))
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<K> BTree<K> {
    /// Snapshot of every node's keys, level by level from the root, left to
    /// right within a level.
    pub fn levels(&self) -> Vec<Vec<Vec<K>>>
    where
        K: Clone,
    {
        let mut levels = Vec::new();
        let mut queue: VecDeque<(&Node<K>, usize)> = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back((root, 0));
        }

        while let Some((node, depth)) = queue.pop_front() {
            if levels.len() == depth {
                levels.push(Vec::new());
            }
            levels[depth].push(node.keys.clone());
            for child in &node.children {
                queue.push_back((&**child, depth + 1));
            }
        }
        levels
    }

    /// Depth of every leaf, left to right.
    pub fn leaf_depths(&self) -> Vec<usize> {
        let mut depths = Vec::new();
        if let Some(root) = self.root.as_deref() {
            collect_leaf_depths(root, 0, &mut depths);
        }
        depths
    }
}

fn collect_leaf_depths<K>(node: &Node<K>, depth: usize, depths: &mut Vec<usize>) {
    if node.is_leaf {
        depths.push(depth);
        return;
    }
    for child in &node.children {
        collect_leaf_depths(child, depth + 1, depths);
    }
}
