//! Demand-rendering propagation across nested embeddings.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Per-embedding "frame requested" flag with a weak link to the enclosing
/// embedding's flag.
///
/// Initialized set, so the first frame always renders. [`invalidate`] walks
/// the parent chain iteratively and marks every ancestor: a redraw deep
/// inside a nested embedding (3D-in-2D-in-3D) marks all levels before the
/// next outer frame tick, so no level displays a texture one frame behind
/// its source.
///
/// Parent links are lookup-only — a child never keeps its parent alive, and
/// a parent unmounting mid-flight simply ends the walk.
///
/// [`invalidate`]: FrameRequest::invalidate
pub struct FrameRequest {
    requested: Cell<bool>,
    parent: RefCell<Weak<FrameRequest>>,
}

impl FrameRequest {
    /// Flag for an outermost embedding (no parent).
    pub fn root() -> Rc<Self> {
        Rc::new(Self {
            requested: Cell::new(true),
            parent: RefCell::new(Weak::new()),
        })
    }

    /// Flag for an embedding nested inside `parent`.
    pub fn nested(parent: &Rc<FrameRequest>) -> Rc<Self> {
        Rc::new(Self {
            requested: Cell::new(true),
            parent: RefCell::new(Rc::downgrade(parent)),
        })
    }

    /// Re-parent after a remount. The flag itself is left as-is.
    pub fn set_parent(&self, parent: Option<&Rc<FrameRequest>>) {
        *self.parent.borrow_mut() = match parent {
            Some(p) => Rc::downgrade(p),
            None => Weak::new(),
        };
    }

    #[inline]
    pub fn is_requested(&self) -> bool {
        self.requested.get()
    }

    /// Marks this embedding and every ancestor for redraw.
    pub fn invalidate(&self) {
        self.requested.set(true);
        let mut next = self.parent.borrow().upgrade();
        while let Some(parent) = next {
            parent.requested.set(true);
            next = parent.parent.borrow().upgrade();
        }
    }

    /// Clears the local flag after a render pass consumed it, and re-marks
    /// the parent chain so ancestors pick up the fresh texture.
    pub fn clear_frame_request(&self) {
        self.requested.set(false);
        if let Some(parent) = self.parent.borrow().upgrade() {
            parent.invalidate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── initial state ─────────────────────────────────────────────────────

    #[test]
    fn first_frame_is_requested() {
        assert!(FrameRequest::root().is_requested());
        let root = FrameRequest::root();
        assert!(FrameRequest::nested(&root).is_requested());
    }

    // ── propagation ───────────────────────────────────────────────────────

    #[test]
    fn invalidate_marks_every_ancestor() {
        // 3D-in-2D-in-3D: outer ← middle ← inner.
        let outer = FrameRequest::root();
        let middle = FrameRequest::nested(&outer);
        let inner = FrameRequest::nested(&middle);

        outer.clear_frame_request();
        middle.clear_frame_request();
        inner.clear_frame_request();
        // clear_frame_request re-marks parents; settle all levels first.
        outer.clear_frame_request();
        middle.clear_frame_request();
        outer.clear_frame_request();
        assert!(!outer.is_requested());
        assert!(!middle.is_requested());
        assert!(!inner.is_requested());

        inner.invalidate();
        assert!(inner.is_requested());
        assert!(middle.is_requested());
        assert!(outer.is_requested());
    }

    #[test]
    fn clear_remarks_parent_chain() {
        let outer = FrameRequest::root();
        let inner = FrameRequest::nested(&outer);

        outer.clear_frame_request();
        assert!(!outer.is_requested());

        // Inner consumed its request → outer must redraw to show the result.
        inner.clear_frame_request();
        assert!(!inner.is_requested());
        assert!(outer.is_requested());
    }

    // ── parent lifetime ───────────────────────────────────────────────────

    #[test]
    fn dropped_parent_ends_the_walk() {
        let outer = FrameRequest::root();
        let inner = FrameRequest::nested(&outer);
        drop(outer);

        // No panic, no dangling marks.
        inner.invalidate();
        inner.clear_frame_request();
        assert!(!inner.is_requested());
    }

    #[test]
    fn reparent_redirects_propagation() {
        let first = FrameRequest::root();
        let second = FrameRequest::root();
        let child = FrameRequest::nested(&first);

        child.set_parent(Some(&second));
        first.clear_frame_request();
        second.clear_frame_request();

        child.invalidate();
        assert!(!first.is_requested());
        assert!(second.is_requested());
    }
}
