use log::trace;

use super::handle::Handle;
use super::node::Side;
use super::raw_tree::{Inserted, RawTree};
use crate::color::Color;
use crate::error::Result;

impl<K, V> RawTree<K, V, Color> {
    /// Returns the color of a link; empty links are black.
    #[inline]
    pub(crate) fn color_of(&self, link: Option<Handle>) -> Color {
        link.map_or(Color::Black, |handle| *self.node(handle).color())
    }

    fn paint(&mut self, handle: Handle, color: Color) {
        self.node_mut(handle).set_color(color);
    }

    /// Restores the red-black invariants after `inserted` was attached as a red node.
    ///
    /// The only possible violation is a red node with a red parent. Each pass either
    /// pushes it two levels up (red uncle) or removes it with at most two rotations.
    pub(crate) fn insert_fix_up(&mut self, inserted: Handle) {
        let mut node = inserted;

        loop {
            let Some(parent) = self.node(node).parent() else {
                break;
            };
            if self.node(parent).color().is_black() {
                break;
            }
            // A red root only appears after a removal; the closing repaint fixes it.
            let Some(grandparent) = self.node(parent).parent() else {
                break;
            };
            let parent_side = if self.node(grandparent).left() == Some(parent) {
                Side::Left
            } else {
                Side::Right
            };
            let uncle_side = parent_side.opposite();
            let uncle = self.node(grandparent).child(uncle_side);

            if let Some(uncle) = uncle.filter(|&uncle| self.color_of(Some(uncle)).is_red()) {
                trace!("fix-up at {node:?}: red uncle {uncle:?}, recoloring {grandparent:?}");
                self.paint(parent, Color::Black);
                self.paint(uncle, Color::Black);
                self.paint(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if self.node(parent).child(uncle_side) == Some(node) {
                trace!("fix-up at {node:?}: inner child, straightening through {parent:?}");
                node = parent;
                self.rotate(Some(node), parent_side)
                    .expect("`RawTree::insert_fix_up()` - an inner child is its parent's pivot");
            }

            let parent = self.node(node).parent().expect("`RawTree::insert_fix_up()` - cursor lost its parent");
            let grandparent = self
                .node(parent)
                .parent()
                .expect("`RawTree::insert_fix_up()` - cursor lost its grandparent");
            trace!("fix-up at {node:?}: outer child, rotating {grandparent:?} {uncle_side:?}");
            self.paint(parent, Color::Black);
            self.paint(grandparent, Color::Red);
            self.rotate(Some(grandparent), uncle_side)
                .expect("`RawTree::insert_fix_up()` - the parent is its grandparent's pivot");
        }

        self.paint_root_black();
    }

    /// The closing step of every insertion, overwrites included.
    fn paint_root_black(&mut self) {
        if let Some(root) = self.root() {
            self.paint(root, Color::Black);
            debug_assert_eq!(self.node(root).parent(), None, "`RawTree::paint_root_black()` - root has a parent");
        }
    }
}

impl<K: PartialOrd, V> RawTree<K, V, Color> {
    /// Inserts as a red node and rebalances. Overwriting an existing key changes no
    /// links; the only color it can change is a red root's, which is painted black.
    pub(crate) fn insert_balanced(&mut self, key: K, value: V) -> Result<Option<V>> {
        match self.insert(key, value, Color::Red)? {
            Inserted::Replaced(old) => {
                self.paint_root_black();
                Ok(Some(old))
            }
            Inserted::Attached(handle) => {
                self.insert_fix_up(handle);
                Ok(None)
            }
        }
    }
}
