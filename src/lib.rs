//! Ordered binary search trees for Rust.
//!
//! This crate provides two trees sharing one node layout and one set of lookup and
//! removal algorithms:
//!
//! - [`SearchTree`] - a plain, unbalanced binary search tree
//! - [`RedBlackTree`] - the same tree kept balanced by red-black coloring, with
//!   O(log n) worst-case height after insertions
//!
//! Both implement [`OrderedTree`], and both expose their structure through
//! [`NodeRef`] so the shape of a tree can be inspected node by node.
//!
//! # Example
//!
//! ```
//! use redblack_bst::{Color, RedBlackTree};
//!
//! let mut tree = RedBlackTree::new();
//! for key in [11, 2, 14, 1, 7, 15, 5, 8, 4] {
//!     tree.insert(key, ())?;
//! }
//!
//! let root = tree.root().unwrap();
//! assert_eq!(*root.key(), 7);
//! assert_eq!(root.left().map(|node| *node.key()), Some(2));
//! assert_eq!(root.right().map(|node| *node.key()), Some(11));
//! assert_eq!(tree.get(&4)?.map(|node| node.color()), Some(Color::Red));
//! # Ok::<(), redblack_bst::Error>(())
//! ```
//!
//! # Keys
//!
//! Keys need only [`PartialOrd`]. Every operation taking a key first checks that the
//! key is comparable, so values such as `f64::NAN` are rejected with
//! [`Error::InvalidKey`] instead of corrupting the order. Inserting a key that is
//! already present overwrites its value.
//!
//! # Removal
//!
//! Removal is structural in both trees: a node with two children is replaced by its
//! in-order predecessor. [`RedBlackTree`] does not rebalance after removal.
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to their parent and children by index, so parent
//! links never own anything and a rotation is a handful of index writes. Empty child
//! links stand in for the black sentinel leaves of the textbook algorithm.
//!
//! The crate logs rotations, rebalancing steps and removals through the [`log`] facade
//! at `trace` and `debug` level; no logger is installed by the crate itself.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod color;
mod error;
mod node_ref;
mod ordered_tree;
mod raw;

pub mod red_black_tree;
pub mod search_tree;

pub use color::Color;
pub use error::{Error, Result, RotationError};
pub use node_ref::NodeRef;
pub use ordered_tree::OrderedTree;
pub use red_black_tree::RedBlackTree;
pub use search_tree::SearchTree;
