//! Node identifiers for the widget arena.
//!
//! Widget nodes live in an arena owned by the builder session. Everything that
//! refers to a node (parent links, child lists, focus) holds a [`NodeId`]
//! rather than a pointer, so a parent link never owns anything and a destroyed
//! node is detected by a failed lookup instead of a dangling reference.

use slotmap::{new_key_type, Key};

new_key_type! {
    /// A unique identifier for a widget node in a tree.
    ///
    /// `NodeId`s are stable handles that remain valid while the tree around
    /// them changes. They become invalid when the node is destroyed, and a
    /// destroyed id is never handed out again for a different node.
    pub struct NodeId;
}

impl NodeId {
    /// Convert the id to a raw u64 value.
    ///
    /// Useful for hosts that key their own element caches by number.
    #[inline]
    pub fn as_raw(self) -> u64 {
        self.data().as_ffi()
    }

    /// Recreate an id from a raw u64 value.
    ///
    /// This does not check that the node still exists.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}
