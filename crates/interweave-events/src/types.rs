use interweave_space::Vec2;
use interweave_space::collab::Intersection;

/// Identifier of an active pointer (mouse, pen, touch contact).
///
/// Hover state is tracked per pointer, so simultaneous touches each keep
/// their own hovered target.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PointerId(pub u32);

impl PointerId {
    /// The primary pointer (a mouse, or the first touch contact).
    pub const PRIMARY: PointerId = PointerId(1);
}

/// The pointer event vocabulary, mirroring the DOM names.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerUp,
    PointerMove,
    PointerOver,
    PointerOut,
    PointerEnter,
    PointerLeave,
    PointerCancel,
    Wheel,
    /// Forwarded to caller handlers only; never routed through dispatch.
    LostPointerCapture,
}

impl EventKind {
    /// Kinds that deliver a primary handler after hover synthesis.
    ///
    /// Over/out/enter/leave raw events only drive hover-state transitions;
    /// the synthesized events carry the actual enter/leave delivery.
    #[inline]
    pub fn is_primary(self) -> bool {
        matches!(
            self,
            EventKind::PointerDown
                | EventKind::PointerUp
                | EventKind::PointerMove
                | EventKind::PointerCancel
                | EventKind::Wheel
        )
    }
}

/// Scroll delta carried by [`EventKind::Wheel`] events.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct WheelDelta {
    pub x: f32,
    pub y: f32,
}

/// A browser pointer/wheel event, reduced to what mapping needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub pointer: PointerId,
    /// Position in client (DOM pixel) coordinates.
    pub client: Vec2,
    pub wheel: Option<WheelDelta>,
}

/// A 3D-engine raycast event carrying the intersection list for the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RaycastEvent {
    pub kind: EventKind,
    pub pointer: PointerId,
    /// Ordered nearest-first; empty when the ray missed every surface.
    pub intersections: Vec<Intersection>,
    pub wheel: Option<WheelDelta>,
}

/// Raw input accepted by an [`crate::EventSystem`].
#[derive(Debug, Clone, PartialEq)]
pub enum RawEvent {
    Dom(DomEvent),
    Raycast(RaycastEvent),
}

impl RawEvent {
    #[inline]
    pub fn kind(&self) -> EventKind {
        match self {
            RawEvent::Dom(ev) => ev.kind,
            RawEvent::Raycast(ev) => ev.kind,
        }
    }

    #[inline]
    pub fn pointer(&self) -> PointerId {
        match self {
            RawEvent::Dom(ev) => ev.pointer,
            RawEvent::Raycast(ev) => ev.pointer,
        }
    }

    #[inline]
    pub fn wheel(&self) -> Option<WheelDelta> {
        match self {
            RawEvent::Dom(ev) => ev.wheel,
            RawEvent::Raycast(ev) => ev.wheel,
        }
    }
}
