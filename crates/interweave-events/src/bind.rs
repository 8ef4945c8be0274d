//! Handler tables binding an event system to a caller's input source.
//!
//! The component layer attaches the returned [`Bindings`] to whatever
//! produces raw events (DOM listeners, the 3D engine's event props). Each
//! listed event kind runs the system's internal dispatch first, then the
//! caller-supplied extra handler — extras are additive and can never skip
//! internal handling.

use std::collections::HashMap;

use crate::boundary::{EventBoundary, EventSink};
use crate::system::EventSystem;
use crate::types::{EventKind, RawEvent};

/// Caller-supplied handler chained after internal dispatch.
pub type ExtraHandler = Box<dyn FnMut(&RawEvent)>;

/// Which event kinds a binding serves, and the extras chained onto them.
pub struct HandlerTable {
    /// Kinds routed through [`EventSystem::dispatch`].
    routed: Vec<EventKind>,
    /// Kinds handed to the extra handler only (never dispatched).
    forwarded: Vec<EventKind>,
    extra: HashMap<EventKind, ExtraHandler>,
}

impl HandlerTable {
    /// Table for a DOM-fed system: the standard pointer set plus wheel.
    pub fn dom() -> Self {
        Self {
            routed: vec![
                EventKind::PointerUp,
                EventKind::PointerDown,
                EventKind::PointerOver,
                EventKind::PointerOut,
                EventKind::PointerLeave,
                EventKind::PointerMove,
                EventKind::PointerCancel,
                EventKind::Wheel,
            ],
            forwarded: Vec::new(),
            extra: HashMap::new(),
        }
    }

    /// Table for a raycast-fed system.
    ///
    /// Adds `pointerenter` (the 3D engine raises it per surface) and always
    /// forwards `lostpointercapture` to the extra handler so capture-aware
    /// callers keep working.
    pub fn raycast() -> Self {
        Self {
            routed: vec![
                EventKind::PointerUp,
                EventKind::PointerDown,
                EventKind::PointerOver,
                EventKind::PointerOut,
                EventKind::PointerEnter,
                EventKind::PointerLeave,
                EventKind::PointerMove,
                EventKind::PointerCancel,
                EventKind::Wheel,
            ],
            forwarded: vec![EventKind::LostPointerCapture],
            extra: HashMap::new(),
        }
    }

    /// Chain a caller handler after internal dispatch for `kind`.
    pub fn with_extra(mut self, kind: EventKind, handler: impl FnMut(&RawEvent) + 'static) -> Self {
        self.extra.insert(kind, Box::new(handler));
        self
    }

    /// Whether this table has an entry for `kind` at all.
    pub fn handles(&self, kind: EventKind) -> bool {
        self.routed.contains(&kind) || self.forwarded.contains(&kind)
    }
}

/// An event system bound to its handler table — the externally-facing
/// handler object a caller attaches to its input source.
pub struct Bindings {
    system: EventSystem,
    table: HandlerTable,
}

impl Bindings {
    pub fn new(system: EventSystem, table: HandlerTable) -> Self {
        Self { system, table }
    }

    #[inline]
    pub fn system(&self) -> &EventSystem {
        &self.system
    }

    #[inline]
    pub fn system_mut(&mut self) -> &mut EventSystem {
        &mut self.system
    }

    /// Entry point for one raw event from the caller's input source.
    ///
    /// Internal dispatch runs first for routed kinds; the extra handler (if
    /// any) runs after. Kinds the table has no entry for are ignored.
    pub fn handle(
        &mut self,
        ev: &RawEvent,
        boundary: &dyn EventBoundary,
        sink: &mut dyn EventSink,
    ) {
        let kind = ev.kind();
        if self.table.routed.contains(&kind) {
            self.system.dispatch(ev, boundary, sink);
        } else if !self.table.forwarded.contains(&kind) {
            return;
        }
        if let Some(extra) = self.table.extra.get_mut(&kind) {
            extra(ev);
        }
    }
}
