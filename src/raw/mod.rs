mod arena;
mod balance;
mod handle;
mod node;
mod raw_tree;

pub(crate) use handle::Handle;
pub(crate) use node::Side;
pub(crate) use raw_tree::{Inserted, RawTree};
