use core::borrow::Borrow;

use crate::error::Result;
use crate::node_ref::NodeRef;

/// The operations every ordered tree in this crate supports.
///
/// Implemented by [`SearchTree`](crate::SearchTree) and
/// [`RedBlackTree`](crate::RedBlackTree), so code can be written once against either.
///
/// # Examples
///
/// ```
/// use redblack_bst::{OrderedTree, RedBlackTree, SearchTree};
///
/// fn fill<T: OrderedTree<u32, char>>(tree: &mut T) -> redblack_bst::Result {
///     for (key, value) in [(3, 'c'), (1, 'a'), (2, 'b')] {
///         tree.insert(key, value)?;
///     }
///     Ok(())
/// }
///
/// let mut plain = SearchTree::new();
/// let mut balanced = RedBlackTree::new();
/// fill(&mut plain)?;
/// fill(&mut balanced)?;
///
/// assert_eq!(plain.min(), balanced.min());
/// assert_eq!(OrderedTree::remove(&mut plain, &2)?, Some((2, 'b')));
/// # Ok::<(), redblack_bst::Error>(())
/// ```
pub trait OrderedTree<K, V>: Sized {
    /// The per-node color tag exposed through [`NodeRef`].
    type Color;

    /// Inserts an entry, overwriting the value if the key is present. Chainable.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`](crate::Error::InvalidKey) if `key` cannot be ordered.
    fn insert(&mut self, key: K, value: V) -> Result<&mut Self>;

    /// Looks up the node holding `key`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`](crate::Error::InvalidKey) if `key` cannot be ordered.
    fn get<Q>(&self, key: &Q) -> Result<Option<NodeRef<'_, K, V, Self::Color>>>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd;

    /// Returns whether `key` is present.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`](crate::Error::InvalidKey) if `key` cannot be ordered.
    fn has<Q>(&self, key: &Q) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        Ok(self.get(key)?.is_some())
    }

    /// Returns the entry with the smallest key.
    fn min(&self) -> Option<(&K, &V)>;

    /// Returns the entry with the largest key.
    fn max(&self) -> Option<(&K, &V)>;

    /// Removes `key`, returning its entry. A missing key is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`](crate::Error::InvalidKey) if `key` cannot be ordered.
    fn remove<Q>(&mut self, key: &Q) -> Result<Option<(K, V)>>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd;
}
