use core::borrow::Borrow;
use core::fmt;

use crate::error::Result;
use crate::node_ref::NodeRef;
use crate::ordered_tree::OrderedTree;
use crate::raw::{Inserted, RawTree};

/// An unbalanced binary search tree.
///
/// Keys are kept in [in-order] sequence: every key in a node's left subtree is smaller
/// and every key in its right subtree is larger. Nothing bounds the height, so inserting
/// keys in sorted order degrades the tree into a list; see
/// [`RedBlackTree`](crate::RedBlackTree) for the balanced variant.
///
/// Keys need only [`PartialOrd`]. A key that has no ordering (for instance `f64::NAN`)
/// is rejected with [`Error::InvalidKey`](crate::Error::InvalidKey) before anything
/// in the tree changes.
///
/// # Examples
///
/// ```
/// use redblack_bst::SearchTree;
///
/// let mut tree = SearchTree::new();
/// tree.insert(50, "root")?.insert(20, "left")?.insert(70, "right")?;
///
/// assert!(tree.has(&20)?);
/// assert_eq!(tree.min(), Some((&20, &"left")));
/// assert_eq!(tree.max(), Some((&70, &"right")));
///
/// assert_eq!(tree.remove(&50)?, Some((50, "root")));
/// // The in-order predecessor takes the removed node's place.
/// assert_eq!(tree.root().map(|node| *node.key()), Some(20));
/// # Ok::<(), redblack_bst::Error>(())
/// ```
///
/// [in-order]: https://en.wikipedia.org/wiki/Tree_traversal#In-order
pub struct SearchTree<K, V> {
    raw: RawTree<K, V, ()>,
}

impl<K, V> SearchTree<K, V> {
    /// Makes a new, empty `SearchTree`.
    ///
    /// Does not allocate anything on its own.
    #[must_use]
    pub const fn new() -> Self {
        SearchTree { raw: RawTree::new() }
    }

    /// Creates an empty tree with room for at least `capacity` nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_bst::SearchTree;
    ///
    /// let tree: SearchTree<i32, i32> = SearchTree::with_capacity(32);
    /// assert!(tree.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SearchTree {
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
    pub fn root(&self) -> Option<NodeRef<'_, K, V, ()>> {
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
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_bst::SearchTree;
    ///
    /// let mut tree = SearchTree::new();
    /// tree.insert(2, 'b')?.insert(1, 'a')?;
    ///
    /// let one = tree.get(&1)?.unwrap();
    /// assert_eq!(*one.value(), 'a');
    /// assert_eq!(one.parent().map(|node| *node.key()), Some(2));
    /// assert!(tree.get(&3)?.is_none());
    /// # Ok::<(), redblack_bst::Error>(())
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<Option<NodeRef<'_, K, V, ()>>>
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
    /// A node with two children is replaced by its in-order predecessor, the largest
    /// key of its left subtree.
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
}

impl<K: PartialOrd, V> SearchTree<K, V> {
    /// Inserts an entry and returns the tree, so calls can be chained.
    ///
    /// If the key is already present its value is overwritten in place.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`](crate::Error::InvalidKey) if `key` cannot be ordered; the
    /// tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_bst::{Error, SearchTree};
    ///
    /// let mut tree = SearchTree::new();
    /// tree.insert(1.5, "x")?.insert(0.5, "y")?;
    /// assert_eq!(tree.insert(f64::NAN, "z").err(), Some(Error::InvalidKey));
    /// assert_eq!(tree.len(), 2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<&mut Self> {
        self.replace(key, value)?;
        Ok(self)
    }

    /// Inserts an entry, returning the value previously stored under `key`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`](crate::Error::InvalidKey) if `key` cannot be ordered.
    pub fn replace(&mut self, key: K, value: V) -> Result<Option<V>> {
        Ok(match self.raw.insert(key, value, ())? {
            Inserted::Replaced(old) => Some(old),
            Inserted::Attached(_) => None,
        })
    }
}

impl<K: PartialOrd, V> OrderedTree<K, V> for SearchTree<K, V> {
    type Color = ();

    fn insert(&mut self, key: K, value: V) -> Result<&mut Self> {
        SearchTree::insert(self, key, value)
    }

    fn get<Q>(&self, key: &Q) -> Result<Option<NodeRef<'_, K, V, ()>>>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        SearchTree::get(self, key)
    }

    fn has<Q>(&self, key: &Q) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        SearchTree::has(self, key)
    }

    fn min(&self) -> Option<(&K, &V)> {
        SearchTree::min(self)
    }

    fn max(&self) -> Option<(&K, &V)> {
        SearchTree::max(self)
    }

    fn remove<Q>(&mut self, key: &Q) -> Result<Option<(K, V)>>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        SearchTree::remove(self, key)
    }
}

impl<K: Clone, V: Clone> Clone for SearchTree<K, V> {
    fn clone(&self) -> Self {
        SearchTree { raw: self.raw.clone() }
    }
}

impl<K, V> Default for SearchTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SearchTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.raw.entries()).finish()
    }
}
