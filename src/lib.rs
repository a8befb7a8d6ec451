//! This crate exposes an ordered map built on a plain, unbalanced Binary Search Tree (BST),
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key, the value
//! associated with that key and sometimes has child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The [`Tree`] here never rebalances
//! itself, so inserting keys in sorted order produces a tree whose height equals its
//! length. Random insertion orders give a height of roughly `O(lg N)`. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! ## Instantiations
//!
//! The same [`Tree`] is used for two kinds of records:
//!
//! * [`IntTree`] - plain `i32` keys with no payload.
//! * [`JobTree`] - jobs keyed by `(year, job number)` carrying a cost and an estimate.
//!
//! ```
//! use ordered_tree::{JobKey, JobTree, TreeError};
//!
//! let mut jobs = JobTree::new();
//! jobs.new_job(12, 1, 15000.0, 32000.0).unwrap();
//! jobs.new_job(10, 5, 25000.0, 22000.0).unwrap();
//!
//! let (oldest, _) = jobs.oldest().unwrap();
//! assert_eq!(*oldest, JobKey::new(10, 5));
//! assert_eq!(jobs.new_job(10, 5, 0.0, 0.0), Err(TreeError::AlreadyExists));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod job;
pub mod tree;

#[cfg(test)]
mod test;

pub use error::TreeError;
pub use job::{Job, JobKey, JobTree};
pub use tree::{IntTree, Tree};
