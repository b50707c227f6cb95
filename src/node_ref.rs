use core::fmt;
use core::ptr;

use crate::color::Color;
use crate::raw::{Handle, RawTree, Side};

/// A shared view of one node inside a tree.
///
/// Returned by `get` and `root` on [`SearchTree`](crate::SearchTree) and
/// [`RedBlackTree`](crate::RedBlackTree). It borrows the tree, so the structure it
/// shows cannot change while it is alive. `C` is the tree's color tag: [`Color`] for a
/// red-black tree, `()` for an unbalanced one.
///
/// # Examples
///
/// ```
/// use redblack_bst::SearchTree;
///
/// let mut tree = SearchTree::new();
/// tree.insert(2, "b")?.insert(1, "a")?.insert(3, "c")?;
///
/// let root = tree.root().unwrap();
/// assert_eq!(root.entry(), (&2, &"b"));
/// assert_eq!(root.left().map(|node| *node.key()), Some(1));
/// assert_eq!(root.right().and_then(|node| node.parent()), Some(root));
/// # Ok::<(), redblack_bst::Error>(())
/// ```
pub struct NodeRef<'a, K, V, C> {
    tree: &'a RawTree<K, V, C>,
    handle: Handle,
}

impl<'a, K, V, C> NodeRef<'a, K, V, C> {
    pub(crate) fn new(tree: &'a RawTree<K, V, C>, handle: Handle) -> Self {
        Self { tree, handle }
    }

    pub(crate) fn from_link(tree: &'a RawTree<K, V, C>, link: Option<Handle>) -> Option<Self> {
        link.map(|handle| Self::new(tree, handle))
    }

    #[must_use]
    pub fn key(&self) -> &'a K {
        self.tree.node(self.handle).key()
    }

    #[must_use]
    pub fn value(&self) -> &'a V {
        self.tree.node(self.handle).value()
    }

    #[must_use]
    pub fn entry(&self) -> (&'a K, &'a V) {
        let node = self.tree.node(self.handle);
        (node.key(), node.value())
    }

    /// Returns the structural parent, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        Self::from_link(self.tree, self.tree.node(self.handle).parent())
    }

    #[must_use]
    pub fn left(&self) -> Option<Self> {
        Self::from_link(self.tree, self.tree.node(self.handle).left())
    }

    #[must_use]
    pub fn right(&self) -> Option<Self> {
        Self::from_link(self.tree, self.tree.node(self.handle).right())
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tree.root() == Some(self.handle)
    }

    /// Returns the node with the smallest key in the subtree rooted here.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_bst::SearchTree;
    ///
    /// let mut tree = SearchTree::new();
    /// tree.insert(8, ())?.insert(3, ())?.insert(10, ())?.insert(9, ())?;
    ///
    /// let ten = tree.get(&10)?.unwrap();
    /// assert_eq!(*ten.subtree_min().key(), 9);
    /// assert_eq!(*ten.subtree_max().key(), 10);
    /// # Ok::<(), redblack_bst::Error>(())
    /// ```
    #[must_use]
    pub fn subtree_min(&self) -> Self {
        self.walk(Side::Left)
    }

    /// Returns the node with the largest key in the subtree rooted here.
    #[must_use]
    pub fn subtree_max(&self) -> Self {
        self.walk(Side::Right)
    }

    fn walk(&self, side: Side) -> Self {
        let handle = self.tree.extreme(Some(self.handle), side).unwrap_or(self.handle);
        Self::new(self.tree, handle)
    }
}

impl<K, V> NodeRef<'_, K, V, Color> {
    #[must_use]
    pub fn color(&self) -> Color {
        *self.tree.node(self.handle).color()
    }
}

impl<K, V, C> Clone for NodeRef<'_, K, V, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, C> Copy for NodeRef<'_, K, V, C> {}

/// Two views are equal when they show the same node of the same tree.
impl<K, V, C> PartialEq for NodeRef<'_, K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.handle == other.handle
    }
}

impl<K, V, C> Eq for NodeRef<'_, K, V, C> {}

/// Shows the node's own entry and color, and only the keys of its neighbours.
impl<K: fmt::Debug, V: fmt::Debug, C: fmt::Debug> fmt::Debug for NodeRef<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.tree.node(self.handle);
        let key_at = |link: Option<Handle>| link.map(|handle| self.tree.node(handle).key());
        f.debug_struct("Node")
            .field("key", node.key())
            .field("value", node.value())
            .field("color", node.color())
            .field("parent", &key_at(node.parent()))
            .field("left", &key_at(node.left()))
            .field("right", &key_at(node.right()))
            .finish()
    }
}
