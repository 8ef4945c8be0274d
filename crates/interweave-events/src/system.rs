//! The synthetic pointer-event state machine.
//!
//! Responsibilities:
//! - per-pointer hover tracking: `Idle → Hovering(path) → Idle`
//! - enter/leave synthesis along ancestor chains, DOM-style
//! - bubbling primary delivery with consumption

use std::collections::HashMap;

use interweave_space::NodeId;
use interweave_space::Vec2;
use interweave_space::space::is_miss;

use crate::boundary::{EventBoundary, EventSink, SyntheticEvent};
use crate::dom::{DomElement, DomMapper};
use crate::raycast::RaycastMapper;
use crate::types::{EventKind, PointerId, RawEvent};

/// The raw-to-point adapter, selected at construction.
///
/// A closed set by design: only two native input mechanisms exist (browser
/// events and 3D raycasts), and each event system instance serves exactly
/// one of them.
#[derive(Debug, Clone)]
pub enum PointSource {
    Dom(DomMapper),
    Raycast(RaycastMapper),
}

impl PointSource {
    /// Maps a raw event to a point in the 2D tree's local space, or the miss
    /// sentinel when no valid mapping exists.
    ///
    /// A raw event of the wrong variant for this source also has no valid
    /// mapping.
    pub fn map_event_to_point(&self, ev: &RawEvent, boundary: &dyn EventBoundary) -> Vec2 {
        match (self, ev) {
            (PointSource::Dom(mapper), RawEvent::Dom(ev)) => {
                mapper.map_event_to_point(ev, boundary)
            }
            (PointSource::Raycast(mapper), RawEvent::Raycast(ev)) => {
                mapper.map_event_to_point(ev, boundary)
            }
            _ => interweave_space::space::MISS,
        }
    }
}

/// One synthetic event system per input source.
///
/// Owns the per-pointer hover table; at most one hovered target per pointer
/// at any time. All dispatch runs synchronously inside the host frame
/// callback — there is no queue.
pub struct EventSystem {
    source: PointSource,
    /// Hovered path per active pointer, root first and target last.
    hover: HashMap<PointerId, Vec<NodeId>>,
}

impl EventSystem {
    pub fn new(source: PointSource) -> Self {
        Self {
            source,
            hover: HashMap::new(),
        }
    }

    /// System fed by browser pointer/wheel events.
    pub fn dom(element: DomElement) -> Self {
        Self::new(PointSource::Dom(DomMapper::new(element)))
    }

    /// System fed by 3D raycast events.
    pub fn raycast() -> Self {
        Self::new(PointSource::Raycast(RaycastMapper::new()))
    }

    /// The DOM mapper's element snapshot, for callers that refresh layout.
    pub fn dom_element_mut(&mut self) -> Option<&mut DomElement> {
        match &mut self.source {
            PointSource::Dom(mapper) => Some(&mut mapper.element),
            PointSource::Raycast(_) => None,
        }
    }

    /// Currently hovered target for `pointer`, if any.
    pub fn hovered(&self, pointer: PointerId) -> Option<NodeId> {
        self.hover.get(&pointer).and_then(|path| path.last().copied())
    }

    /// Maps, hit-tests, synthesizes hover transitions, and delivers.
    ///
    /// A miss point clears hover state, fires leave/out on the previously
    /// hovered chain, and delivers no primary handler.
    pub fn dispatch(
        &mut self,
        ev: &RawEvent,
        boundary: &dyn EventBoundary,
        sink: &mut dyn EventSink,
    ) {
        let pointer = ev.pointer();
        let point = self.source.map_event_to_point(ev, boundary);
        let new_path = if is_miss(point) {
            Vec::new()
        } else {
            boundary.hit_path(point)
        };
        let old_path = self.hover.get(&pointer).cloned().unwrap_or_default();

        if old_path.last() != new_path.last() {
            log::trace!(
                "pointer {:?} hover {:?} -> {:?}",
                pointer,
                old_path.last(),
                new_path.last()
            );
            self.synthesize_transition(pointer, point, &old_path, &new_path, sink);
        }

        if new_path.is_empty() {
            self.hover.remove(&pointer);
        } else {
            self.hover.insert(pointer, new_path.clone());
        }

        if ev.kind().is_primary() && !new_path.is_empty() {
            self.deliver_bubbling(ev.kind(), pointer, point, &new_path, ev, sink);
        }
    }

    /// Fires out/leave on the old chain and over/enter on the new one.
    ///
    /// Both are restricted to the tail below the common ancestor, so entering
    /// a nested target never re-fires enter on already-hovered ancestors.
    fn synthesize_transition(
        &mut self,
        pointer: PointerId,
        point: Vec2,
        old_path: &[NodeId],
        new_path: &[NodeId],
        sink: &mut dyn EventSink,
    ) {
        let shared = old_path
            .iter()
            .zip(new_path.iter())
            .take_while(|(a, b)| a == b)
            .count();

        if let Some(&old_target) = old_path.last() {
            // `pointerout` bubbles from the old target up to (exclusive) the
            // common ancestor.
            for &node in old_path[shared..].iter().rev() {
                let out = SyntheticEvent {
                    kind: EventKind::PointerOut,
                    pointer,
                    target: old_target,
                    current: node,
                    point,
                    wheel: None,
                };
                if sink.deliver(node, &out).is_consumed() {
                    break;
                }
            }
            // `pointerleave` does not bubble; each left node gets its own,
            // target first, upward.
            for &node in old_path[shared..].iter().rev() {
                let leave = SyntheticEvent {
                    kind: EventKind::PointerLeave,
                    pointer,
                    target: node,
                    current: node,
                    point,
                    wheel: None,
                };
                let _ = sink.deliver(node, &leave);
            }
        }

        if let Some(&new_target) = new_path.last() {
            // `pointerover` bubbles from the new target up to (exclusive) the
            // common ancestor.
            for &node in new_path[shared..].iter().rev() {
                let over = SyntheticEvent {
                    kind: EventKind::PointerOver,
                    pointer,
                    target: new_target,
                    current: node,
                    point,
                    wheel: None,
                };
                if sink.deliver(node, &over).is_consumed() {
                    break;
                }
            }
            // `pointerenter` does not bubble; it fires ancestor first,
            // downward to the target.
            for &node in &new_path[shared..] {
                let enter = SyntheticEvent {
                    kind: EventKind::PointerEnter,
                    pointer,
                    target: node,
                    current: node,
                    point,
                    wheel: None,
                };
                let _ = sink.deliver(node, &enter);
            }
        }
    }

    fn deliver_bubbling(
        &mut self,
        kind: EventKind,
        pointer: PointerId,
        point: Vec2,
        path: &[NodeId],
        raw: &RawEvent,
        sink: &mut dyn EventSink,
    ) {
        let target = *path.last().unwrap();
        for &node in path.iter().rev() {
            let event = SyntheticEvent {
                kind,
                pointer,
                target,
                current: node,
                point,
                wheel: raw.wheel(),
            };
            if sink.deliver(node, &event).is_consumed() {
                break;
            }
        }
    }
}
