//! Live pointer into the precomputed tree.

use crate::action::Move;
use crate::error::CursorDesync;
use crate::tree::{GameTree, TreeNode};
use tracing::{instrument, trace};

/// Tracks the tree node whose position matches the live board.
///
/// Only ever moves downwards, one edge per accepted move.
#[derive(Clone, Copy)]
pub struct TreeCursor<'t> {
    current: &'t TreeNode,
}

impl<'t> TreeCursor<'t> {
    /// Places a cursor at the root of `tree`.
    pub fn new(tree: &'t GameTree) -> Self {
        Self {
            current: tree.root(),
        }
    }

    /// The node the cursor points at.
    pub fn current(&self) -> &'t TreeNode {
        self.current
    }

    /// Follows the child edge labelled `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`CursorDesync`] when the current node has no such child.
    /// The cursor is left where it was.
    #[instrument(skip(self), fields(depth_remaining = self.current.position().empty_count()))]
    pub fn advance(&mut self, mv: Move) -> Result<&'t TreeNode, CursorDesync> {
        let next = self.current.child(mv).ok_or(CursorDesync {
            attempted: mv,
            empty_cells: self.current.position().empty_count(),
        })?;
        trace!(children = next.children().len(), "Cursor advanced");
        self.current = next;
        Ok(next)
    }
}

impl std::fmt::Debug for TreeCursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeCursor")
            .field("last_move", self.current.last_move())
            .field("to_move", self.current.to_move())
            .field("children", &self.current.children().len())
            .finish()
    }
}
