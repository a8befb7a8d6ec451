//! Lazy in-order traversals over a [`Tree`][crate::tree::Tree].
//!
//! An iterator borrows the tree it walks, so the tree can't be mutated while a traversal is being
//! consumed. Each call to [`Tree::iter`][crate::tree::Tree::iter] (or its siblings) starts a fresh
//! traversal over the tree as it is at that moment.

use std::iter::FusedIterator;

use crate::tree::Node;

/// Which way an [`Iter`] walks the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Left subtree, node, right subtree.
    Ascending,
    /// Right subtree, node, left subtree.
    Descending,
}

/// An iterator over the entries of a tree, yielding `(&K, &V)` pairs in ascending or descending
/// key order.
///
/// The traversal keeps a stack of the nodes whose subtrees haven't been fully visited yet, so it
/// uses `O(height)` memory and never recurses.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    direction: Direction,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            direction: self.direction,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, direction: Direction, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            direction,
            remaining: len,
        };
        iter.push_spine(root);
        iter
    }

    /// Pushes `node` and every node along its near edge (the left edge when ascending, the right
    /// edge when descending). The top of the stack is then the next node to yield.
    fn push_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = match self.direction {
                Direction::Ascending => n.left.as_deref(),
                Direction::Descending => n.right.as_deref(),
            };
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let far = match self.direction {
            Direction::Ascending => node.right.as_deref(),
            Direction::Descending => node.left.as_deref(),
        };
        self.push_spine(far);
        self.remaining -= 1;

        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
