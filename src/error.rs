//! The recoverable outcomes a tree operation reports in place of a value. Every variant leaves the
//! tree unchanged.

use thiserror::Error;

/// The ways a [`Tree`][crate::tree::Tree] operation can fail. None of these are fatal: the tree is
/// left exactly as it was before the failing call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeError {
    /// An insert was attempted with a key that is already present. The stored value is untouched.
    #[error("key already exists in tree")]
    AlreadyExists,

    /// A search or delete was attempted with a key that isn't in the tree.
    #[error("key not found in tree")]
    NotFound,

    /// The operation needs at least one node but the tree is empty.
    #[error("attempted to operate on an empty tree")]
    EmptyTree,
}
