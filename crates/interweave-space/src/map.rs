//! Per-view mapping capability set.
//!
//! A [`SpaceMap`] bundles every coordinate query application code can make
//! from inside one 2D view: against its own texture/viewport bounds, out to
//! the client rect, and — only when the view is embedded in a 3D surface —
//! across the embedding boundary into the parent scene.
//!
//! The parent-side capability is an `Option` by design: a top-level view has
//! no enclosing embedding and that absence is the normal, checkable state.
//! Calling a composed parent mapping without it fails with [`NotInScope`]
//! at the call site instead of silently producing wrong coordinates.

use super::collab::{Intersection, PlaneTransform, SurfaceMap};
use super::space::{self, is_miss, MISS};
use super::{NotInScope, Rect, Vec2, Viewport};

/// Mappings across one embedding boundary, into the parent scene.
pub struct ParentSurface<'a> {
    /// UV-addressed geometry of the surface this view's texture is attached to.
    pub surface: &'a dyn SurfaceMap,
    /// Transform of the attachment point within the parent 2D graph, when the
    /// 3D canvas itself lives inside a 2D scene (3D-in-2D nesting).
    pub plane: Option<&'a dyn PlaneTransform>,
}

/// Coordinate queries available from inside one 2D view.
///
/// `bounds` is the view's logical hit area (texture dimensions for an
/// embedded view, viewport dimensions for a top-level one); `element_rect`
/// is the host element's rendered rect in client space.
pub struct SpaceMap<'a> {
    bounds: Rect,
    view: Viewport,
    element_rect: Rect,
    container: &'a dyn PlaneTransform,
    parent: Option<ParentSurface<'a>>,
}

impl<'a> SpaceMap<'a> {
    /// Map for a top-level view (no enclosing embedding).
    pub fn top_level(
        bounds: Rect,
        view: Viewport,
        element_rect: Rect,
        container: &'a dyn PlaneTransform,
    ) -> Self {
        Self {
            bounds,
            view,
            element_rect,
            container,
            parent: None,
        }
    }

    /// Map for a view embedded in a 3D surface.
    pub fn embedded(
        bounds: Rect,
        view: Viewport,
        element_rect: Rect,
        container: &'a dyn PlaneTransform,
        parent: ParentSurface<'a>,
    ) -> Self {
        Self {
            bounds,
            view,
            element_rect,
            container,
            parent: Some(parent),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    // ── own-space queries ─────────────────────────────────────────────────

    /// 2D-Local → UV against this view's bounds.
    #[inline]
    pub fn local_to_uv(&self, local: Vec2) -> Vec2 {
        space::local_to_uv(local, self.bounds)
    }

    /// UV → 2D-Local against this view's bounds.
    #[inline]
    pub fn uv_to_local(&self, uv: Vec2) -> Vec2 {
        space::uv_to_local(uv, self.bounds)
    }

    /// 2D-Local → viewport, through the view's own container transform.
    pub fn local_to_viewport(&self, local: Vec2) -> Vec2 {
        if is_miss(local) {
            return MISS;
        }
        self.container.to_global(local)
    }

    /// Viewport → 2D-Local. Inverse of [`local_to_viewport`].
    ///
    /// [`local_to_viewport`]: SpaceMap::local_to_viewport
    pub fn viewport_to_local(&self, viewport: Vec2) -> Vec2 {
        if is_miss(viewport) {
            return MISS;
        }
        self.container.to_local(viewport)
    }

    /// 2D-Local → client pixels (explicit composition through the viewport).
    pub fn local_to_client(&self, local: Vec2) -> Vec2 {
        space::viewport_to_client(self.local_to_viewport(local), self.element_rect, self.view)
    }

    /// Client pixels → 2D-Local. Inverse of [`local_to_client`].
    ///
    /// [`local_to_client`]: SpaceMap::local_to_client
    pub fn client_to_local(&self, client: Vec2) -> Vec2 {
        self.viewport_to_local(space::client_to_viewport(client, self.element_rect, self.view))
    }

    // ── cross-embedding queries ───────────────────────────────────────────

    fn parent(&self) -> Result<&ParentSurface<'a>, NotInScope> {
        self.parent
            .as_ref()
            .ok_or_else(|| NotInScope::new("view has no enclosing embedding"))
    }

    /// 2D-Local → UV on the parent surface this view is textured onto.
    pub fn local_to_parent_uv(&self, local: Vec2) -> Result<Vec2, NotInScope> {
        self.parent()?;
        Ok(self.local_to_uv(local))
    }

    /// 2D-Local → positions in the parent mesh's own frame.
    ///
    /// May yield zero or several hits; the surface unwrap decides.
    pub fn local_to_parent_surface(&self, local: Vec2) -> Result<Vec<Intersection>, NotInScope> {
        let parent = self.parent()?;
        let uv = self.local_to_uv(local);
        if is_miss(uv) {
            return Ok(Vec::new());
        }
        Ok(parent.surface.uv_to_surface(uv))
    }

    /// 2D-Local → world positions in the parent 3D scene.
    pub fn local_to_parent_world(&self, local: Vec2) -> Result<Vec<Intersection>, NotInScope> {
        let parent = self.parent()?;
        let uv = self.local_to_uv(local);
        if is_miss(uv) {
            return Ok(Vec::new());
        }
        Ok(parent.surface.uv_to_world(uv))
    }

    /// 2D-Local → the grandparent 2D graph's global frame (3D-in-2D nesting).
    pub fn local_to_parent_plane(&self, local: Vec2) -> Result<Vec2, NotInScope> {
        let parent = self.parent()?;
        let plane = parent
            .plane
            .ok_or_else(|| NotInScope::new("embedding surface is not inside a 2D scene"))?;
        if is_miss(local) {
            return Ok(MISS);
        }
        Ok(plane.to_global(local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::Intersection;
    use crate::{SurfaceId, Vec3};

    /// Pure translation transform.
    struct Offset(Vec2);

    impl PlaneTransform for Offset {
        fn to_global(&self, local: Vec2) -> Vec2 {
            local + self.0
        }
        fn to_local(&self, global: Vec2) -> Vec2 {
            global - self.0
        }
    }

    /// Planar unit-square surface at z = 0, spanning `size` world units.
    struct FlatSurface {
        size: Vec2,
    }

    impl SurfaceMap for FlatSurface {
        fn uv_to_surface(&self, uv: Vec2) -> Vec<Intersection> {
            vec![Intersection {
                distance: 0.0,
                world: Vec3::zero(),
                local: Vec3::new(uv.x * self.size.x, uv.y * self.size.y, 0.0),
                normal: Vec3::new(0.0, 0.0, 1.0),
                uv: Some(uv),
                surface: SurfaceId(7),
            }]
        }
        fn uv_to_world(&self, uv: Vec2) -> Vec<Intersection> {
            self.uv_to_surface(uv)
        }
    }

    fn texture_bounds() -> Rect {
        Rect::new(0.0, 0.0, 400.0, 400.0)
    }

    fn view() -> Viewport {
        Viewport::new(800.0, 600.0, 1.0)
    }

    // ── own-space composition ─────────────────────────────────────────────

    #[test]
    fn client_round_trip_through_container() {
        let container = Offset(Vec2::new(20.0, 30.0));
        let map = SpaceMap::top_level(
            texture_bounds(),
            view(),
            Rect::new(100.0, 100.0, 800.0, 600.0),
            &container,
        );
        let p = Vec2::new(40.0, 75.0);
        let back = map.client_to_local(map.local_to_client(p));
        assert!(back.distance_max(p) < 1e-4);
    }

    // ── parent capability ─────────────────────────────────────────────────

    #[test]
    fn top_level_has_no_parent() {
        let container = Offset(Vec2::zero());
        let map = SpaceMap::top_level(texture_bounds(), view(), texture_bounds(), &container);
        assert!(!map.has_parent());
        assert!(map.local_to_parent_world(Vec2::new(10.0, 10.0)).is_err());
        assert!(map.local_to_parent_uv(Vec2::new(10.0, 10.0)).is_err());
    }

    #[test]
    fn embedded_composes_local_through_uv_to_world() {
        let container = Offset(Vec2::zero());
        let surface = FlatSurface {
            size: Vec2::new(2.0, 2.0),
        };
        let map = SpaceMap::embedded(
            texture_bounds(),
            view(),
            texture_bounds(),
            &container,
            ParentSurface {
                surface: &surface,
                plane: None,
            },
        );
        // Texture center → uv (0.5, 0.5) → surface center (1, 1, 0).
        let hits = map.local_to_parent_world(Vec2::new(200.0, 200.0)).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].local, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn embedded_without_plane_rejects_plane_query() {
        let container = Offset(Vec2::zero());
        let surface = FlatSurface {
            size: Vec2::new(1.0, 1.0),
        };
        let map = SpaceMap::embedded(
            texture_bounds(),
            view(),
            texture_bounds(),
            &container,
            ParentSurface {
                surface: &surface,
                plane: None,
            },
        );
        assert!(map.local_to_parent_uv(Vec2::new(100.0, 100.0)).is_ok());
        assert!(map.local_to_parent_plane(Vec2::new(100.0, 100.0)).is_err());
    }

    #[test]
    fn miss_input_yields_no_parent_hits() {
        let container = Offset(Vec2::zero());
        let surface = FlatSurface {
            size: Vec2::new(1.0, 1.0),
        };
        let map = SpaceMap::embedded(
            texture_bounds(),
            view(),
            texture_bounds(),
            &container,
            ParentSurface {
                surface: &surface,
                plane: None,
            },
        );
        assert!(map.local_to_parent_world(space::MISS).unwrap().is_empty());
    }
}
