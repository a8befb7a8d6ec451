//! An unbalanced BST. Every child slot is an owned, possibly-absent `Box` so the tree exclusively
//! owns all of its nodes. Nothing is ever rotated: the shape of the tree is decided entirely by the
//! order keys were inserted in.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), Err(TreeError::EmptyTree));
//!
//! tree.insert(1, 2).unwrap();
//! assert_eq!(tree.search(&1), Ok(&2));
//!
//! // Inserting the same key again is rejected and keeps the original value.
//! assert_eq!(tree.insert(1, 3), Err(TreeError::AlreadyExists));
//! assert_eq!(tree.search(&1), Ok(&2));
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&1), Ok(2));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::error::TreeError;
use crate::iter::{Direction, Iter};

/// A tree of integers with no payload.
pub type IntTree = Tree<i32, ()>;

/// An ordered map backed by an unbalanced Binary Search Tree. This can be used for inserting,
/// finding, and deleting keys and values, and for visiting them in key order.
pub struct Tree<K, V> {
    root: Link<K, V>,
    len: usize,
}

/// A possibly-absent child. `None` is the only representation of "no child".
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Clone for Tree<K, V>
where
    K: Clone,
    V: Clone,
{
    /// Copies the tree node for node, so the clone has exactly the same shape. Works from an
    /// explicit stack rather than recursing, since a skewed tree is as deep as it is long.
    fn clone(&self) -> Self {
        enum Step<'a, K, V> {
            Enter(Option<&'a Node<K, V>>),
            Build(&'a Node<K, V>),
        }

        // Post-order: a node is built once both of its cloned subtrees are on `built`.
        let mut built: Vec<Link<K, V>> = Vec::new();
        let mut stack = vec![Step::Enter(self.root.as_deref())];
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(None) => built.push(None),
                Step::Enter(Some(node)) => {
                    stack.push(Step::Build(node));
                    stack.push(Step::Enter(node.right.as_deref()));
                    stack.push(Step::Enter(node.left.as_deref()));
                }
                Step::Build(node) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Node {
                        key: node.key.clone(),
                        value: node.value.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        Self {
            root: built.pop().flatten(),
            len: self.len,
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Tree<K, V> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        debug!("initializing tree");
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a height
    /// of 0 and a tree built from sorted keys has a height equal to its length.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<_> = self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Returns the smallest key in the tree along with its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.minimum(), Err(TreeError::EmptyTree));
    ///
    /// tree.insert(2, "two").unwrap();
    /// tree.insert(1, "one").unwrap();
    /// assert_eq!(tree.minimum(), Ok((&1, &"one")));
    /// ```
    pub fn minimum(&self) -> Result<(&K, &V), TreeError> {
        let mut node = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }

        Ok((&node.key, &node.value))
    }

    /// Returns the largest key in the tree along with its value.
    pub fn maximum(&self) -> Result<(&K, &V), TreeError> {
        let mut node = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }

        Ok((&node.key, &node.value))
    }

    /// Visits every entry from the smallest key to the largest. An empty tree gives an empty
    /// iterator.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), Direction::Ascending, self.len)
    }

    /// Visits every entry from the largest key to the smallest.
    pub fn iter_rev(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), Direction::Descending, self.len)
    }

    /// Like [`Tree::iter`] but reports [`TreeError::EmptyTree`] instead of yielding nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// assert!(matches!(tree.ascending(), Err(TreeError::EmptyTree)));
    ///
    /// tree.insert(3, ()).unwrap();
    /// tree.insert(1, ()).unwrap();
    /// let keys: Vec<_> = tree.ascending().unwrap().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, vec![1, 3]);
    /// ```
    pub fn ascending(&self) -> Result<Iter<'_, K, V>, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        Ok(self.iter())
    }

    /// Like [`Tree::iter_rev`] but reports [`TreeError::EmptyTree`] instead of yielding nothing.
    pub fn descending(&self) -> Result<Iter<'_, K, V>, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        Ok(self.iter_rev())
    }

    /// The keys of the tree in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// The values of the tree in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Removes every node and returns how many were removed. Children are always released before
    /// their parent. Calling this on an empty tree does nothing.
    ///
    /// The walk keeps its own stack so very deep (skewed) trees don't overflow the call stack.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            match (node.left.take(), node.right.take()) {
                (None, None) => released += 1,
                (left, right) => {
                    // Revisit `node` once both of its subtrees are gone, left subtree first.
                    stack.push(node);
                    stack.extend(right);
                    stack.extend(left);
                }
            }
        }

        debug_assert_eq!(released, self.len);
        self.len = 0;
        debug!("destroying tree ({released} nodes)");
        released
    }

    /// Inserts the given value into the tree stored at the given key. If the key is already
    /// present, nothing changes and [`TreeError::AlreadyExists`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, 2).unwrap();
    /// assert_eq!(tree.search(&1), Ok(&2));
    ///
    /// assert_eq!(tree.insert(1, 3), Err(TreeError::AlreadyExists));
    /// assert_eq!(tree.search(&1), Ok(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<(), TreeError>
    where
        K: Ord,
    {
        let slot = find_slot(&mut self.root, &key);
        if slot.is_some() {
            trace!("rejecting insert of an existing key");
            return Err(TreeError::AlreadyExists);
        }

        *slot = Some(Node::new_boxed(key, value));
        self.len += 1;
        Ok(())
    }

    /// Finds the value associated with the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2).unwrap();
    ///
    /// assert_eq!(tree.search(&1), Ok(&2));
    /// assert_eq!(tree.search(&42), Err(TreeError::NotFound));
    /// ```
    pub fn search(&self, key: &K) -> Result<&V, TreeError>
    where
        K: Ord,
    {
        let mut node = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        loop {
            node = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Ok(&node.value),
                Ordering::Greater => node.right.as_deref(),
            }
            .ok_or(TreeError::NotFound)?;
        }
    }

    /// Like [`Tree::search`] but gives mutable access to the value. The key itself can't be
    /// changed since that could break the ordering of the tree.
    pub fn search_mut(&mut self, key: &K) -> Result<&mut V, TreeError>
    where
        K: Ord,
    {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        find_slot(&mut self.root, key)
            .as_deref_mut()
            .map(|node| &mut node.value)
            .ok_or(TreeError::NotFound)
    }

    /// Whether the tree holds the given key. This is the existence check callers can run before
    /// [`Tree::delete`] if they'd rather branch than handle [`TreeError::NotFound`].
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_ok()
    }

    /// Deletes the node containing the given key from the tree and returns its value.
    ///
    /// A node with two children is replaced by its in-order successor (the smallest node of its
    /// right subtree): the successor's key and value move into the deleted node's slot and the
    /// successor is unlinked from the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2).unwrap();
    ///
    /// assert_eq!(tree.delete(&7), Err(TreeError::NotFound));
    /// assert_eq!(tree.delete(&1), Ok(2));
    /// assert_eq!(tree.delete(&1), Err(TreeError::EmptyTree));
    /// ```
    pub fn delete(&mut self, key: &K) -> Result<V, TreeError>
    where
        K: Ord,
    {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }

        let slot = find_slot(&mut self.root, key);
        let mut node = slot.take().ok_or(TreeError::NotFound)?;
        let successor = if node.left.is_some() {
            take_min(&mut node.right)
        } else {
            None
        };

        let removed = match successor {
            Some(successor) => {
                trace!("deleting node with two children");
                let successor = *successor;
                node.key = successor.key;
                let removed = mem::replace(&mut node.value, successor.value);
                *slot = Some(node);
                removed
            }
            None => {
                let Node {
                    value, left, right, ..
                } = *node;
                trace!(
                    "deleting node with {} children",
                    usize::from(left.is_some()) + usize::from(right.is_some())
                );
                *slot = left.or(right);
                value
            }
        };

        self.len -= 1;
        Ok(removed)
    }
}

impl<K> Tree<K, ()> {
    /// Inserts a bare key into a tree that carries no values.
    pub fn insert_key(&mut self, key: K) -> Result<(), TreeError>
    where
        K: Ord,
    {
        self.insert(key, ())
    }
}

/// Walks down from `link` to the slot where `key` lives, or would live if it were inserted. The
/// returned link is `Some` exactly when the key is present.
fn find_slot<'a, K, V>(mut link: &'a mut Link<K, V>, key: &K) -> &'a mut Link<K, V>
where
    K: Ord,
{
    loop {
        let ord = match link.as_deref() {
            Some(node) => key.cmp(&node.key),
            None => return link,
        };

        // `link` is moved into the match so the step below reborrows the node, not the cursor.
        link = match (ord, link) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, found) => return found,
        };
    }
}

/// Unlinks the smallest node of the subtree at `link`, lifting its right child into its place.
/// Returns `None` if the subtree is empty.
fn take_min<K, V>(mut link: &mut Link<K, V>) -> Link<K, V> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        link = match link {
            Some(node) => &mut node.left,
            None => return None,
        };
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}
