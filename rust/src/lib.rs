//! B-tree implementation in Rust with a set-like API.
//!
//! This crate provides an in-memory B-tree of minimum degree `t`. Every node
//! other than the root holds between `t - 1` and `2t - 1` keys. Insertion
//! splits full nodes on the way down, and deletion borrows from or merges
//! siblings on the way down, so every operation is a single pass from the root.
//!
//! ```
//! use btree::BTree;
//!
//! let mut tree = BTree::new(2).unwrap();
//! for key in [10, 20, 5, 6, 12, 30, 7, 17] {
//!     tree.insert(key);
//! }
//! tree.remove(&6);
//! tree.remove(&13); // absent: no-op
//!
//! let keys: Vec<_> = tree.traverse().copied().collect();
//! assert_eq!(keys, [5, 7, 10, 12, 17, 20, 30]);
//! assert!(tree.check_invariants());
//! ```

mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod tree_structure;
mod types;
mod validation;

pub use construction::validation::{recommended_degree, validate_degree};
pub use construction::DEFAULT_DEGREE;
pub use error::{BTreeError, BTreeResult, InitResult, ModifyResult};
pub use iteration::Iter;
pub use types::{BTree, Location, MAX_DEGREE, MIN_DEGREE};
