use interweave_space::space::{self, MISS};
use interweave_space::{Rect, Vec2};

use crate::boundary::EventBoundary;
use crate::types::RaycastEvent;

/// Maps UV coordinates ([0, 1] on the hit surface) into the 2D tree's local
/// space, scaled into `bounds`.
///
/// Standalone so coordinate-bijection consumers outside the dispatch path
/// can reuse the exact mapping hit-testing uses.
#[inline]
pub fn map_uv_to_point(uv: Vec2, bounds: Rect) -> Vec2 {
    space::uv_to_local(uv, bounds)
}

/// Maps 3D-engine raycast events into the 2D tree's local space via the
/// nearest intersection's UV.
#[derive(Debug, Clone, Default)]
pub struct RaycastMapper;

impl RaycastMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_event_to_point(&self, ev: &RaycastEvent, boundary: &dyn EventBoundary) -> Vec2 {
        // Intersections arrive nearest-first; only the front surface counts.
        let Some(hit) = ev.intersections.first() else {
            return MISS;
        };
        let Some(uv) = hit.uv else {
            // Geometry without UVs cannot address the texture.
            return MISS;
        };
        map_uv_to_point(uv, boundary.mapping_bounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interweave_space::collab::Intersection;
    use interweave_space::space::is_miss;
    use interweave_space::{NodeId, SurfaceId, Vec3};

    use crate::types::{EventKind, PointerId};

    struct FixedBoundary {
        hit_area: Option<Rect>,
        bounds: Rect,
    }

    impl EventBoundary for FixedBoundary {
        fn root_hit_area(&self) -> Option<Rect> {
            self.hit_area
        }
        fn root_bounds(&self) -> Rect {
            self.bounds
        }
        fn hit_path(&self, _point: Vec2) -> Vec<NodeId> {
            Vec::new()
        }
    }

    fn intersection(uv: Option<Vec2>, distance: f32) -> Intersection {
        Intersection {
            distance,
            world: Vec3::zero(),
            local: Vec3::zero(),
            normal: Vec3::new(0.0, 0.0, 1.0),
            uv,
            surface: SurfaceId(1),
        }
    }

    fn event(intersections: Vec<Intersection>) -> RaycastEvent {
        RaycastEvent {
            kind: EventKind::PointerMove,
            pointer: PointerId::PRIMARY,
            intersections,
            wheel: None,
        }
    }

    fn boundary() -> FixedBoundary {
        FixedBoundary {
            hit_area: Some(Rect::new(0.0, 0.0, 400.0, 300.0)),
            bounds: Rect::default(),
        }
    }

    // ── miss determinism ──────────────────────────────────────────────────

    #[test]
    fn empty_intersections_map_to_miss() {
        let mapper = RaycastMapper::new();
        assert!(is_miss(mapper.map_event_to_point(&event(Vec::new()), &boundary())));
    }

    #[test]
    fn intersection_without_uv_maps_to_miss() {
        let mapper = RaycastMapper::new();
        let ev = event(vec![intersection(None, 1.0)]);
        assert!(is_miss(mapper.map_event_to_point(&ev, &boundary())));
    }

    // ── uv mapping ────────────────────────────────────────────────────────

    #[test]
    fn nearest_intersection_wins() {
        let mapper = RaycastMapper::new();
        let ev = event(vec![
            intersection(Some(Vec2::new(0.25, 0.5)), 1.0),
            intersection(Some(Vec2::new(0.9, 0.9)), 4.0),
        ]);
        let p = mapper.map_event_to_point(&ev, &boundary());
        assert_eq!(p, Vec2::new(100.0, 150.0));
    }

    #[test]
    fn standalone_uv_mapping_matches_dispatch_mapping() {
        let mapper = RaycastMapper::new();
        let uv = Vec2::new(0.5, 0.25);
        let ev = event(vec![intersection(Some(uv), 1.0)]);
        let b = boundary();
        assert_eq!(
            mapper.map_event_to_point(&ev, &b),
            map_uv_to_point(uv, b.hit_area.unwrap()),
        );
    }
}
