use interweave_space::{NodeId, Rect, Vec2};

use crate::types::{EventKind, PointerId, WheelDelta};

/// Hit-testing primitive of the 2D graph, consumed as an opaque capability.
///
/// A boundary that panics during a hit test indicates a misconfigured tree;
/// the panic propagates — dispatch does not catch it.
pub trait EventBoundary {
    /// Explicit hit-area rectangle of the root, when one was set.
    ///
    /// Authoritative over [`root_bounds`] for mapping, since hit areas are
    /// set deliberately by the embedding owner.
    ///
    /// [`root_bounds`]: EventBoundary::root_bounds
    fn root_hit_area(&self) -> Option<Rect>;

    /// Bounds derived from the root's content.
    fn root_bounds(&self) -> Rect;

    /// Deepest node under `point` plus its ancestor chain, root first and
    /// target last. Empty when nothing is hit.
    fn hit_path(&self, point: Vec2) -> Vec<NodeId>;
}

impl dyn EventBoundary + '_ {
    /// The bounds mapping should scale against: the explicit hit area when
    /// present, derived bounds otherwise.
    pub fn mapping_bounds(&self) -> Rect {
        self.root_hit_area().unwrap_or_else(|| self.root_bounds())
    }
}

/// A synthesized pointer event delivered to 2D graph nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticEvent {
    pub kind: EventKind,
    pub pointer: PointerId,
    /// The node the event is about (hit target, or the node being left/entered).
    pub target: NodeId,
    /// The node currently receiving delivery (differs from `target` while
    /// bubbling).
    pub current: NodeId,
    /// Position in the 2D tree's local space.
    pub point: Vec2,
    pub wheel: Option<WheelDelta>,
}

/// Result returned by [`EventSink::deliver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled — stop bubbling to ancestors.
    Consumed,
    /// Event was not handled — keep bubbling.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// Receiver for synthesized events, owned by the component layer.
///
/// Dispatch calls this once per (node, event) pair: enter/leave events are
/// delivered without bubbling and the result is ignored; primary events
/// bubble target to root until a sink returns [`EventResult::Consumed`].
pub trait EventSink {
    fn deliver(&mut self, node: NodeId, event: &SyntheticEvent) -> EventResult;
}
