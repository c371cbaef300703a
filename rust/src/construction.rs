//! Construction and initialization logic for BTree and nodes.
//!
//! This module contains degree validation, tree and node constructors, and the
//! default implementation.

use crate::error::{BTreeError, InitResult};
use crate::types::{BTree, Node, MAX_DEGREE, MIN_DEGREE};

/// Default minimum degree: nodes hold up to 11 keys.
pub const DEFAULT_DEGREE: usize = 6;

impl<K> BTree<K> {
    /// Create an empty B-tree with minimum degree `degree`.
    ///
    /// # Arguments
    ///
    /// * `degree` - Minimum degree `t`, from 2 up to `MAX_DEGREE`. Nodes
    ///   hold between `t - 1` and `2t - 1` keys.
    ///
    /// # Returns
    ///
    /// Returns `Ok(BTree)` if the degree is valid, `Err(BTreeError)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::<i32>::new(3).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(BTree::<i32>::new(1).is_err());
    /// ```
    pub fn new(degree: usize) -> InitResult<Self> {
        validation::validate_degree(degree)?;
        Ok(Self {
            degree,
            root: None,
            len: 0,
        })
    }

    /// Create an empty B-tree with the default degree.
    ///
    /// This is equivalent to calling `new(DEFAULT_DEGREE)`.
    pub fn with_default_degree() -> Self {
        Self {
            degree: DEFAULT_DEGREE,
            root: None,
            len: 0,
        }
    }
}

impl<K> Node<K> {
    /// Creates an empty node, pre-allocated to the largest size it may reach.
    pub(crate) fn new(degree: usize, is_leaf: bool) -> Self {
        let children = if is_leaf {
            Vec::new()
        } else {
            Vec::with_capacity(2 * degree)
        };
        Self {
            degree,
            keys: Vec::with_capacity(2 * degree - 1),
            children,
            is_leaf,
        }
    }
}

impl<K> Default for BTree<K> {
    /// Create a B-tree with the default degree.
    fn default() -> Self {
        Self::with_default_degree()
    }
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that `degree` can be used as a minimum degree.
    pub fn validate_degree(degree: usize) -> InitResult<()> {
        if degree < MIN_DEGREE {
            Err(BTreeError::invalid_degree(degree, MIN_DEGREE))
        } else if degree > MAX_DEGREE {
            Err(BTreeError::degree_too_large(degree, MAX_DEGREE))
        } else {
            Ok(())
        }
    }

    /// Suggest a minimum degree for a tree expected to hold `expected_len` keys.
    ///
    /// Small trees stay shallow even with narrow nodes; large ones benefit from
    /// wider nodes that keep the height down.
    pub fn recommended_degree(expected_len: usize) -> usize {
        if expected_len < 100 {
            MIN_DEGREE
        } else if expected_len < 10_000 {
            DEFAULT_DEGREE
        } else if expected_len < 1_000_000 {
            16
        } else {
            32
        }
    }
}
