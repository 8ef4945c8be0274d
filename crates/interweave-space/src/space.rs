//! Pure bijection pairs between adjacent coordinate spaces.
//!
//! Responsibilities:
//! - stateless mapping functions, each invertible by its named partner
//! - the miss sentinel that "no intersection" resolves to
//!
//! The round-trip law holds for every pair on finite inputs: composing a
//! mapping with its partner reproduces the original point within floating
//! tolerance. NDC↔UV is the exception — it goes through a raycast (see
//! [`crate::collab::Raycaster`]) and is lossy when the ray misses, in which
//! case the result is [`MISS`], never an approximation.

use super::{Rect, Vec2, Viewport};

/// Designated "ray did not intersect any surface" point.
///
/// Deliberately far outside any plausible coordinate range so a sentinel
/// that leaks into a hit test deterministically resolves to "no target"
/// rather than a spurious (0, 0) hit.
pub const MISS: Vec2 = Vec2::new(f32::MIN, f32::MIN);

/// Returns `true` if `p` is the miss sentinel.
#[inline]
pub fn is_miss(p: Vec2) -> bool {
    p == MISS
}

/// Client (DOM pixels) → Viewport (canvas pixels).
///
/// `element_rect` is the bound element's rendered rect in client space.
/// Scaling by the ratio of viewport size to rendered size keeps the mapping
/// correct when CSS resizes the element independently of the backing store.
#[inline]
pub fn client_to_viewport(client: Vec2, element_rect: Rect, view: Viewport) -> Vec2 {
    if is_miss(client) || element_rect.is_empty() {
        return MISS;
    }
    let offset = client - element_rect.origin;
    Vec2::new(
        offset.x / element_rect.size.x * view.width,
        offset.y / element_rect.size.y * view.height,
    )
}

/// Viewport (canvas pixels) → Client (DOM pixels). Inverse of
/// [`client_to_viewport`].
#[inline]
pub fn viewport_to_client(viewport: Vec2, element_rect: Rect, view: Viewport) -> Vec2 {
    if is_miss(viewport) || !view.is_valid() {
        return MISS;
    }
    Vec2::new(
        viewport.x / view.width * element_rect.size.x + element_rect.origin.x,
        viewport.y / view.height * element_rect.size.y + element_rect.origin.y,
    )
}

/// Viewport (pixels, y down) → NDC ([-1, 1], y up).
#[inline]
pub fn viewport_to_ndc(viewport: Vec2, view: Viewport) -> Vec2 {
    if is_miss(viewport) || !view.is_valid() {
        return MISS;
    }
    Vec2::new(
        viewport.x / view.width * 2.0 - 1.0,
        1.0 - viewport.y / view.height * 2.0,
    )
}

/// NDC ([-1, 1], y up) → Viewport (pixels, y down). Inverse of
/// [`viewport_to_ndc`].
#[inline]
pub fn ndc_to_viewport(ndc: Vec2, view: Viewport) -> Vec2 {
    if is_miss(ndc) {
        return MISS;
    }
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * view.width,
        (1.0 - ndc.y) * 0.5 * view.height,
    )
}

/// UV ([0, 1] on the hit surface) → 2D-Local, scaled into `bounds`.
///
/// `bounds` is the logical hit-area rectangle of the consuming 2D tree
/// (texture dimensions plus origin).
#[inline]
pub fn uv_to_local(uv: Vec2, bounds: Rect) -> Vec2 {
    if is_miss(uv) {
        return MISS;
    }
    Vec2::new(
        uv.x * bounds.size.x + bounds.origin.x,
        uv.y * bounds.size.y + bounds.origin.y,
    )
}

/// 2D-Local → UV ([0, 1]). Inverse of [`uv_to_local`].
#[inline]
pub fn local_to_uv(local: Vec2, bounds: Rect) -> Vec2 {
    if is_miss(local) || bounds.is_empty() {
        return MISS;
    }
    Vec2::new(
        (local.x - bounds.origin.x) / bounds.size.x,
        (local.y - bounds.origin.y) / bounds.size.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-6;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(a.distance_max(b) < TOL, "{a:?} != {b:?}");
    }

    // ── round trips ───────────────────────────────────────────────────────

    #[test]
    fn client_viewport_round_trip() {
        let rect = Rect::new(100.0, 50.0, 200.0, 300.0);
        let view = Viewport::new(800.0, 600.0, 2.0);
        let p = Vec2::new(173.5, 212.25);
        let back = viewport_to_client(client_to_viewport(p, rect, view), rect, view);
        assert_close(back, p);
    }

    #[test]
    fn viewport_ndc_round_trip() {
        let view = Viewport::new(1280.0, 720.0, 1.0);
        let p = Vec2::new(311.0, 642.5);
        assert_close(ndc_to_viewport(viewport_to_ndc(p, view), view), p);
    }

    #[test]
    fn uv_local_round_trip() {
        let bounds = Rect::new(4.0, 8.0, 400.0, 400.0);
        let p = Vec2::new(0.37, 0.91);
        assert_close(local_to_uv(uv_to_local(p, bounds), bounds), p);
    }

    // ── orientation ───────────────────────────────────────────────────────

    #[test]
    fn ndc_is_y_up() {
        let view = Viewport::new(100.0, 100.0, 1.0);
        // Top-left of the viewport is (-1, 1) in NDC.
        assert_close(viewport_to_ndc(Vec2::zero(), view), Vec2::new(-1.0, 1.0));
        // Center maps to the origin.
        assert_close(viewport_to_ndc(Vec2::new(50.0, 50.0), view), Vec2::zero());
    }

    // ── miss sentinel ─────────────────────────────────────────────────────

    #[test]
    fn miss_propagates_through_every_mapping() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let view = Viewport::new(10.0, 10.0, 1.0);
        assert!(is_miss(client_to_viewport(MISS, rect, view)));
        assert!(is_miss(viewport_to_client(MISS, rect, view)));
        assert!(is_miss(viewport_to_ndc(MISS, view)));
        assert!(is_miss(ndc_to_viewport(MISS, view)));
        assert!(is_miss(uv_to_local(MISS, rect)));
        assert!(is_miss(local_to_uv(MISS, rect)));
    }

    #[test]
    fn miss_never_hit_tests_as_origin() {
        // A sentinel must not land inside any plausible hit area.
        let huge = Rect::new(-1.0e6, -1.0e6, 2.0e6, 2.0e6);
        assert!(!huge.contains(MISS));
    }

    #[test]
    fn degenerate_context_maps_to_miss() {
        let empty = Rect::new(0.0, 0.0, 0.0, 0.0);
        let view = Viewport::new(10.0, 10.0, 1.0);
        assert!(is_miss(client_to_viewport(Vec2::new(5.0, 5.0), empty, view)));
        assert!(is_miss(local_to_uv(Vec2::new(5.0, 5.0), empty)));
    }
}
