use alloc::vec::Vec;

use super::handle::Handle;

/// One cell of the arena: a live node, or a link in the chain of vacated cells.
#[derive(Clone)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<Handle> },
}

/// Slot storage that owns every node of a tree.
///
/// Links between nodes are [`Handle`]s into the arena, so parent back-links never own
/// anything and a rotation is a handful of index writes under one `&mut` borrow.
/// Removed nodes leave a vacant slot behind that the next insertion reuses.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    // Most recently vacated slot; each vacant slot points at the one vacated before it.
    free_head: Option<Handle>,
    occupied: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: None,
            occupied: 0,
        }
    }

    pub(crate) fn with_capacity(nodes: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(nodes),
            free_head: None,
            occupied: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.occupied
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Stores `node`, reusing the most recently vacated slot if there is one.
    pub(crate) fn alloc(&mut self, node: T) -> Handle {
        let handle = match self.free_head {
            Some(handle) => {
                let slot = &mut self.slots[handle.to_index()];
                let Slot::Vacant { next_free } = *slot else {
                    unreachable!("`Arena::alloc()` - free chain reached an occupied slot");
                };
                self.free_head = next_free;
                *slot = Slot::Occupied(node);
                handle
            }
            None => {
                assert!(
                    self.slots.len() <= Handle::MAX,
                    "`Arena::alloc()` - arena is at maximum capacity ({})",
                    Handle::MAX + 1
                );
                self.slots.push(Slot::Occupied(node));
                Handle::from_index(self.slots.len() - 1)
            }
        };
        self.occupied += 1;
        handle
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match &self.slots[handle.to_index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("`Arena::get()` - `handle` is invalid!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match &mut self.slots[handle.to_index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("`Arena::get_mut()` - `handle` is invalid!"),
        }
    }

    /// Moves the node out and pushes its slot onto the free chain.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let vacant = Slot::Vacant { next_free: self.free_head };
        match core::mem::replace(&mut self.slots[handle.to_index()], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(handle);
                self.occupied -= 1;
                node
            }
            Slot::Vacant { next_free } => {
                // Restore the chain.
                self.slots[handle.to_index()] = Slot::Vacant { next_free };
                panic!("`Arena::take()` - `handle` is invalid!")
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.occupied = 0;
    }
}
