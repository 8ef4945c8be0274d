use interweave_space::space::{self, is_miss, MISS};
use interweave_space::{Rect, Vec2, Viewport};

use crate::boundary::EventBoundary;
use crate::types::DomEvent;

/// Snapshot of the bound host element, refreshed by the caller when the
/// element moves or resizes.
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Whether the element is currently attached to the document.
    pub attached: bool,
    /// Rendered bounding rect in client coordinates, valid while attached.
    pub bounding_rect: Rect,
    /// Backing-store pixel dimensions, the fallback basis while detached.
    pub nominal_size: Vec2,
}

impl DomElement {
    /// The rect client offsets are scaled against.
    ///
    /// A detached element has no layout rect; falling back to its nominal
    /// dimensions at zero offset is degraded but defined, so events keep
    /// mapping during reparenting instead of failing.
    fn reference_rect(&self) -> Rect {
        if self.attached {
            self.bounding_rect
        } else {
            Rect::from_size(self.nominal_size)
        }
    }
}

/// Maps browser pointer/wheel events into the 2D tree's local space.
///
/// Scales the client-relative offset by the ratio of the tree's logical
/// hit-area size to the element's rendered size, which keeps hit-testing
/// correct under CSS scaling and resizing independent of device pixel ratio.
#[derive(Debug, Clone)]
pub struct DomMapper {
    pub element: DomElement,
}

impl DomMapper {
    pub fn new(element: DomElement) -> Self {
        Self { element }
    }

    pub fn map_event_to_point(&self, ev: &DomEvent, boundary: &dyn EventBoundary) -> Vec2 {
        let rect = self.element.reference_rect();
        if rect.is_empty() {
            // Zero-area element: no valid mapping exists.
            return MISS;
        }
        let hit_area = boundary.mapping_bounds();
        let scaled = space::client_to_viewport(
            ev.client,
            rect,
            Viewport::new(hit_area.width(), hit_area.height(), 1.0),
        );
        if is_miss(scaled) {
            return MISS;
        }
        scaled + hit_area.origin
    }
}
