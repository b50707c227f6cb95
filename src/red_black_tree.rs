use core::borrow::Borrow;
use core::fmt;

use crate::color::Color;
use crate::error::Result;
use crate::node_ref::NodeRef;
use crate::ordered_tree::OrderedTree;
use crate::raw::{RawTree, Side};

/// A binary search tree kept balanced by [red-black] coloring.
///
/// Every node is [`Color::Red`] or [`Color::Black`] and, after every insertion, the tree
/// satisfies:
///
/// - the root is black;
/// - a red node never has a red parent;
/// - every path from a node down to an empty link crosses the same number of black
///   nodes (empty links count as black).
///
/// Together these bound the height by `2 * log2(n + 1)`, so `insert`, `get`, `has`,
/// `min` and `max` take O(log n) time.
///
/// Lookups, `min`/`max` and `remove` share their implementation with
/// [`SearchTree`](crate::SearchTree). In particular `remove` is purely structural: it
/// splices the in-order predecessor into the removed node's slot and does **not**
/// recolor or rotate afterwards, so the coloring rules above may no longer hold once
/// entries have been removed. Later insertions still rebalance around the nodes they
/// touch.
///
/// # Examples
///
/// ```
/// use redblack_bst::{Color, RedBlackTree};
///
/// let mut tree = RedBlackTree::new();
/// for key in 1..=7 {
///     tree.insert(key, key * 10)?;
/// }
///
/// // Ascending inserts would make a plain search tree a list; here the tree stays shallow.
/// let root = tree.root().unwrap();
/// assert_eq!(*root.key(), 2);
/// assert_eq!(root.color(), Color::Black);
/// assert_eq!(tree.get(&5)?.map(|node| *node.value()), Some(50));
/// # Ok::<(), redblack_bst::Error>(())
/// ```
///
/// [red-black]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
pub struct RedBlackTree<K, V> {
    raw: RawTree<K, V, Color>,
}

impl<K, V> RedBlackTree<K, V> {
    /// Makes a new, empty `RedBlackTree`.
    ///
    /// Does not allocate anything on its own.
    #[must_use]
    pub const fn new() -> Self {
        RedBlackTree { raw: RawTree::new() }
    }

    /// Creates an empty tree with room for at least `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        RedBlackTree {
            raw: RawTree::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the number of entries in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the root node, or `None` if the tree is empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, K, V, Color>> {
        NodeRef::from_link(&self.raw, self.raw.root())
    }

    /// Returns the entry with the smallest key, or `None` if the tree is empty.
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        self.raw.min()
    }

    /// Returns the entry with the largest key, or `None` if the tree is empty.
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        self.raw.max()
    }

    /// Looks up the node holding `key`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`](crate::Error::InvalidKey) if `key` cannot be ordered.
    pub fn get<Q>(&self, key: &Q) -> Result<Option<NodeRef<'_, K, V, Color>>>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        Ok(NodeRef::from_link(&self.raw, self.raw.search(key)?))
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`](crate::Error::InvalidKey) if `key` cannot be ordered.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<Option<&mut V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        self.raw.get_mut(key)
    }

    /// Returns whether `key` is present.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`](crate::Error::InvalidKey) if `key` cannot be ordered.
    pub fn has<Q>(&self, key: &Q) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        Ok(self.raw.search(key)?.is_some())
    }

    /// Removes `key` and returns its entry, or `Ok(None)` if it was not present.
    ///
    /// The removal is structural only; see the [type-level notes](RedBlackTree) on
    /// coloring after removal.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`](crate::Error::InvalidKey) if `key` cannot be ordered.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<Option<(K, V)>>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        self.raw.remove(key)
    }

    /// Rotates the subtree rooted at `key` to the left: its right child takes its place
    /// and it becomes that child's left child.
    ///
    /// Colors are not touched, so a rotation outside of rebalancing may break the
    /// coloring rules. The in-order sequence of keys never changes.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidKey`](crate::Error::InvalidKey) if `key` cannot be ordered.
    /// - [`RotationError::NilNode`](crate::RotationError::NilNode) if `key` is absent.
    /// - [`RotationError::MissingPivot`](crate::RotationError::MissingPivot) if the node
    ///   has no right child.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_bst::{Error, RedBlackTree, RotationError};
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1, ())?.insert(2, ())?.insert(3, ())?;
    ///
    /// tree.rotate_left(&2)?;
    /// assert_eq!(tree.root().map(|node| *node.key()), Some(3));
    /// assert_eq!(tree.rotate_left(&3), Err(Error::Rotation(RotationError::MissingPivot)));
    /// assert_eq!(tree.rotate_left(&9), Err(Error::Rotation(RotationError::NilNode)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn rotate_left<Q>(&mut self, key: &Q) -> Result
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        self.rotate(key, Side::Left)
    }

    /// Rotates the subtree rooted at `key` to the right: its left child takes its place
    /// and it becomes that child's right child.
    ///
    /// Colors are not touched; see [`rotate_left`](RedBlackTree::rotate_left).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidKey`](crate::Error::InvalidKey) if `key` cannot be ordered.
    /// - [`RotationError::NilNode`](crate::RotationError::NilNode) if `key` is absent.
    /// - [`RotationError::MissingPivot`](crate::RotationError::MissingPivot) if the node
    ///   has no left child.
    pub fn rotate_right<Q>(&mut self, key: &Q) -> Result
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        self.rotate(key, Side::Right)
    }

    fn rotate<Q>(&mut self, key: &Q, direction: Side) -> Result
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        let node = self.raw.search(key)?;
        self.raw.rotate(node, direction)?;
        Ok(())
    }
}

impl<K: PartialOrd, V> RedBlackTree<K, V> {
    /// Inserts an entry, rebalancing as needed, and returns the tree so calls can be
    /// chained.
    ///
    /// A new key is attached as a red node and the coloring is repaired by recoloring
    /// and at most two rotations per level. If the key is already present its value is
    /// overwritten in place and no links change; the root is still painted black, which
    /// matters only when a removal has left a red node there.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`](crate::Error::InvalidKey) if `key` cannot be ordered; the
    /// tree is left unchanged.
    pub fn insert(&mut self, key: K, value: V) -> Result<&mut Self> {
        self.replace(key, value)?;
        Ok(self)
    }

    /// Inserts an entry, returning the value previously stored under `key`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`](crate::Error::InvalidKey) if `key` cannot be ordered.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_bst::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.replace("k", 1)?, None);
    /// assert_eq!(tree.replace("k", 2)?, Some(1));
    /// assert_eq!(tree.len(), 1);
    /// # Ok::<(), redblack_bst::Error>(())
    /// ```
    pub fn replace(&mut self, key: K, value: V) -> Result<Option<V>> {
        self.raw.insert_balanced(key, value)
    }
}

impl<K: PartialOrd, V> OrderedTree<K, V> for RedBlackTree<K, V> {
    type Color = Color;

    fn insert(&mut self, key: K, value: V) -> Result<&mut Self> {
        RedBlackTree::insert(self, key, value)
    }

    fn get<Q>(&self, key: &Q) -> Result<Option<NodeRef<'_, K, V, Color>>>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        RedBlackTree::get(self, key)
    }

    fn has<Q>(&self, key: &Q) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        RedBlackTree::has(self, key)
    }

    fn min(&self) -> Option<(&K, &V)> {
        RedBlackTree::min(self)
    }

    fn max(&self) -> Option<(&K, &V)> {
        RedBlackTree::max(self)
    }

    fn remove<Q>(&mut self, key: &Q) -> Result<Option<(K, V)>>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        RedBlackTree::remove(self, key)
    }
}

impl<K: Clone, V: Clone> Clone for RedBlackTree<K, V> {
    fn clone(&self) -> Self {
        RedBlackTree { raw: self.raw.clone() }
    }
}

impl<K, V> Default for RedBlackTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RedBlackTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.raw.entries()).finish()
    }
}
