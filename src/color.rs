/// The color tag carried by every node of a [`RedBlackTree`](crate::RedBlackTree).
///
/// Empty child links have no node to carry a tag and count as [`Color::Black`].
///
/// # Examples
///
/// ```
/// use redblack_bst::{Color, RedBlackTree};
///
/// let mut tree = RedBlackTree::new();
/// tree.insert(2, "two")?.insert(1, "one")?;
///
/// assert_eq!(tree.root().map(|root| root.color()), Some(Color::Black));
/// assert_eq!(tree.get(&1)?.map(|node| node.color()), Some(Color::Red));
/// # Ok::<(), redblack_bst::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }

    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }
}
