use core::borrow::Borrow;
use core::cmp::Ordering;

use log::{debug, trace};

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use crate::error::{Error, Result, RotationError};

/// The binary search tree machinery shared by `SearchTree` and `RedBlackTree`.
///
/// Nodes live in an arena and link to each other by handle. Every mutation keeps the
/// parent links exact, so any node can be walked up from as well as down.
#[derive(Clone)]
pub(crate) struct RawTree<K, V, C> {
    /// Arena owning every node of the tree.
    nodes: Arena<Node<K, V, C>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

/// Outcome of an insertion.
pub(crate) enum Inserted<V> {
    /// The key was present; its value was overwritten and the old one is returned.
    Replaced(V),
    /// A new node was attached at a former empty link.
    Attached(Handle),
}

/// In-order walk over the entries of a [`RawTree`].
///
/// Steps to each successor through the parent links, so it needs no stack however deep
/// the tree is.
pub(crate) struct Entries<'a, K, V, C> {
    tree: &'a RawTree<K, V, C>,
    next: Option<Handle>,
    remaining: usize,
}

impl<'a, K, V, C> Iterator for Entries<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.next?;
        self.next = self.tree.successor(handle);
        self.remaining -= 1;
        let node = self.tree.node(handle);
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, C> ExactSizeIterator for Entries<'_, K, V, C> {}

/// Checks that `key` can be ordered at all.
fn check_key<Q: ?Sized + PartialOrd>(key: &Q) -> Result {
    match key.partial_cmp(key) {
        Some(Ordering::Equal) => Ok(()),
        _ => Err(Error::InvalidKey),
    }
}

#[inline]
fn compare<K, Q>(key: &Q, existing: &K) -> Result<Ordering>
where
    K: Borrow<Q>,
    Q: ?Sized + PartialOrd,
{
    key.partial_cmp(existing.borrow()).ok_or(Error::InvalidKey)
}

impl<K, V, C> RawTree<K, V, C> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new, empty tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V, C> {
        self.nodes.get(handle)
    }

    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V, C> {
        self.nodes.get_mut(handle)
    }

    /// Walks from `from` as far as possible toward `side`: the minimum of the subtree for
    /// `Side::Left`, the maximum for `Side::Right`.
    pub(crate) fn extreme(&self, from: Option<Handle>, side: Side) -> Option<Handle> {
        let mut current = from?;
        while let Some(next) = self.node(current).child(side) {
            current = next;
        }
        Some(current)
    }

    /// Returns the first entry in key order.
    pub(crate) fn min(&self) -> Option<(&K, &V)> {
        let node = self.node(self.extreme(self.root, Side::Left)?);
        Some((node.key(), node.value()))
    }

    /// Returns the last entry in key order.
    pub(crate) fn max(&self) -> Option<(&K, &V)> {
        let node = self.node(self.extreme(self.root, Side::Right)?);
        Some((node.key(), node.value()))
    }

    /// Returns the node that follows `handle` in key order.
    fn successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.node(handle).right() {
            return self.extreme(Some(right), Side::Left);
        }
        let mut current = handle;
        while let Some(parent) = self.node(current).parent() {
            if self.node(parent).left() == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// Iterates over every entry in key order.
    pub(crate) fn entries(&self) -> Entries<'_, K, V, C> {
        Entries {
            tree: self,
            next: self.extreme(self.root, Side::Left),
            remaining: self.len(),
        }
    }

    /// Returns which child of its parent `handle` is, or `None` for the root.
    pub(crate) fn side_of(&self, handle: Handle) -> Option<Side> {
        let parent = self.node(handle).parent()?;
        if self.node(parent).left() == Some(handle) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Points the link that leads to `existing` (its parent's child slot, or the root)
    /// at `replacement`, and makes `existing`'s parent the parent of `replacement`.
    ///
    /// `existing` keeps its own links; the caller decides what becomes of them.
    pub(crate) fn transplant(&mut self, existing: Handle, replacement: Option<Handle>) {
        let parent = self.node(existing).parent();
        match self.side_of(existing) {
            None => self.root = replacement,
            Some(side) => {
                if let Some(parent) = parent {
                    self.node_mut(parent).set_child(side, replacement);
                }
            }
        }
        if let Some(replacement) = replacement {
            self.node_mut(replacement).set_parent(parent);
        }
    }

    /// Rotates the subtree at `node` toward `direction`.
    ///
    /// The pivot is the child on the opposite side; it takes `node`'s place, `node`
    /// becomes the pivot's child on the `direction` side, and the pivot's former inner
    /// subtree moves under `node`. In-order sequence is unchanged.
    pub(crate) fn rotate(&mut self, node: Option<Handle>, direction: Side) -> core::result::Result<(), RotationError> {
        let node = node.ok_or(RotationError::NilNode)?;
        let (west, east) = (direction, direction.opposite());
        let pivot = self.node(node).child(east).ok_or(RotationError::MissingPivot)?;
        trace!("rotating {node:?} {direction:?} around pivot {pivot:?}");

        let inner = self.node(pivot).child(west);
        if let Some(inner) = inner {
            self.node_mut(inner).set_parent(Some(node));
        }
        self.node_mut(node).set_child(east, inner);

        self.transplant(node, Some(pivot));

        self.node_mut(pivot).set_child(west, Some(node));
        self.node_mut(node).set_parent(Some(pivot));
        Ok(())
    }

    /// Detaches `handle` from the tree without freeing it, splicing its children back in.
    ///
    /// With two children, the in-order predecessor (maximum of the left subtree) is
    /// detached first and then takes over `handle`'s slot and both remaining children.
    fn unlink(&mut self, handle: Handle) {
        let node = self.node(handle);
        match (node.left(), node.right()) {
            (None, None) => self.transplant(handle, None),
            (Some(child), None) | (None, Some(child)) => self.transplant(handle, Some(child)),
            (Some(left), Some(_)) => {
                let replacement = self
                    .extreme(Some(left), Side::Right)
                    .expect("`RawTree::unlink()` - a left child always has a maximum");
                debug!("unlinking {handle:?}: predecessor {replacement:?} takes its slot");

                // The predecessor has no right child, so this is never the two-child case.
                self.unlink(replacement);

                for side in [Side::Left, Side::Right] {
                    let child = self.node(handle).child(side);
                    self.node_mut(replacement).set_child(side, child);
                    if let Some(child) = child {
                        self.node_mut(child).set_parent(Some(replacement));
                    }
                }
                self.transplant(handle, Some(replacement));
            }
        }

        let node = self.node_mut(handle);
        node.set_parent(None);
        node.set_child(Side::Left, None);
        node.set_child(Side::Right, None);
    }

    /// Searches for `key`, returning the handle of its node.
    pub(crate) fn search<Q>(&self, key: &Q) -> Result<Option<Handle>>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        check_key(key)?;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            current = match compare(key, node.key())? {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Ok(Some(handle)),
            };
        }
        Ok(None)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Result<Option<&mut V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        Ok(self.search(key)?.map(|handle| self.node_mut(handle).value_mut()))
    }

    /// Removes the node holding `key` and returns its entry.
    ///
    /// Purely structural: node colors are left as they were.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Result<Option<(K, V)>>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialOrd,
    {
        let Some(handle) = self.search(key)? else {
            return Ok(None);
        };
        self.unlink(handle);
        Ok(Some(self.nodes.take(handle).into_entry()))
    }
}

impl<K: PartialOrd, V, C> RawTree<K, V, C> {
    /// Inserts `key`, overwriting the value in place when the key is already present.
    ///
    /// A new node gets `color` and is attached at the empty link the descent ends on.
    /// The key is compared along the whole path before anything is touched.
    pub(crate) fn insert(&mut self, key: K, value: V, color: C) -> Result<Inserted<V>> {
        check_key(&key)?;

        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            side = match compare(&key, node.key())? {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    let old = self.node_mut(handle).replace_value(value);
                    return Ok(Inserted::Replaced(old));
                }
            };
            parent = Some(handle);
            current = node.child(side);
        }

        let mut node = Node::new(key, value, color);
        node.set_parent(parent);
        let handle = self.nodes.alloc(node);
        match parent {
            None => self.root = Some(handle),
            Some(parent) => self.node_mut(parent).set_child(side, Some(handle)),
        }
        Ok(Inserted::Attached(handle))
    }
}
