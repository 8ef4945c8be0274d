//! Collaborator traits consumed by the bijections.
//!
//! These are the seams to the two scene graphs. The 2D graph supplies
//! [`PlaneTransform`]; the 3D engine supplies [`Raycaster`] and
//! [`SurfaceMap`]. Nothing here is implemented in this workspace — camera
//! math and hit-tree walks stay with their owners.

use super::{SurfaceId, Vec2, Vec3};

/// A 2D node's own transform: its local frame against the 2D graph's
/// global (world) frame.
pub trait PlaneTransform {
    /// 2D-Local → the graph's global frame.
    fn to_global(&self, local: Vec2) -> Vec2;

    /// The graph's global frame → 2D-Local. Inverse of [`to_global`].
    ///
    /// [`to_global`]: PlaneTransform::to_global
    fn to_local(&self, global: Vec2) -> Vec2;
}

/// One ray/surface intersection, in ascending ray distance order when
/// returned in a list.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    /// Distance along the ray.
    pub distance: f32,
    /// Hit position in world units.
    pub world: Vec3,
    /// Hit position in the surface's own frame.
    pub local: Vec3,
    /// Surface normal at the hit, world units.
    pub normal: Vec3,
    /// Texture coordinate at the hit, when the geometry carries UVs.
    pub uv: Option<Vec2>,
    /// The surface that was hit.
    pub surface: SurfaceId,
}

/// Camera-parameterized ray queries, supplied by the 3D engine.
pub trait Raycaster {
    /// Casts from the camera through `ndc`; intersections ordered nearest
    /// first. Empty when the ray misses everything.
    fn cast(&self, ndc: Vec2) -> Vec<Intersection>;

    /// Projects a world position back through the camera to NDC.
    fn project(&self, world: Vec3) -> Vec2;
}

/// UV-addressed queries against one embedding surface, supplied by the 3D
/// engine's geometry for the mesh a texture is attached to.
///
/// A UV can map to several positions (e.g. a surface whose unwrap reuses
/// texture regions), so both queries return lists ordered the way the
/// engine enumerates faces.
pub trait SurfaceMap {
    /// UV on this surface → positions in the mesh's own frame.
    fn uv_to_surface(&self, uv: Vec2) -> Vec<Intersection>;

    /// UV on this surface → positions in parent-scene world units.
    fn uv_to_world(&self, uv: Vec2) -> Vec<Intersection>;
}

/// NDC → UV through a raycast: the nearest intersection's UV.
///
/// The lossy half of the NDC↔UV pair — a ray that misses every surface (or
/// hits geometry without UVs) yields the miss sentinel, never an
/// approximated coordinate.
pub fn ndc_to_uv(raycaster: &dyn Raycaster, ndc: Vec2) -> Vec2 {
    if crate::space::is_miss(ndc) {
        return crate::space::MISS;
    }
    raycaster
        .cast(ndc)
        .first()
        .and_then(|hit| hit.uv)
        .unwrap_or(crate::space::MISS)
}

/// UV → NDC: lift the UV onto the surface, then project through the camera.
///
/// Uses the first surface position when the unwrap yields several.
pub fn uv_to_ndc(raycaster: &dyn Raycaster, surface: &dyn SurfaceMap, uv: Vec2) -> Vec2 {
    if crate::space::is_miss(uv) {
        return crate::space::MISS;
    }
    match surface.uv_to_world(uv).first() {
        Some(hit) => raycaster.project(hit.world),
        None => crate::space::MISS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::{is_miss, MISS};

    /// Camera looking straight at a unit quad spanning NDC [-1, 1]²; UV and
    /// world coordinates coincide up to the [0,1] ↔ [-1,1] rescale.
    struct QuadScene;

    fn quad_hit(uv: Vec2) -> Intersection {
        Intersection {
            distance: 1.0,
            world: Vec3::new(uv.x * 2.0 - 1.0, uv.y * 2.0 - 1.0, 0.0),
            local: Vec3::new(uv.x, uv.y, 0.0),
            normal: Vec3::new(0.0, 0.0, 1.0),
            uv: Some(uv),
            surface: SurfaceId(1),
        }
    }

    impl Raycaster for QuadScene {
        fn cast(&self, ndc: Vec2) -> Vec<Intersection> {
            if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
                return Vec::new();
            }
            vec![quad_hit(Vec2::new((ndc.x + 1.0) * 0.5, (ndc.y + 1.0) * 0.5))]
        }
        fn project(&self, world: Vec3) -> Vec2 {
            Vec2::new(world.x, world.y)
        }
    }

    impl SurfaceMap for QuadScene {
        fn uv_to_surface(&self, uv: Vec2) -> Vec<Intersection> {
            vec![quad_hit(uv)]
        }
        fn uv_to_world(&self, uv: Vec2) -> Vec<Intersection> {
            vec![quad_hit(uv)]
        }
    }

    // ── ndc ↔ uv ──────────────────────────────────────────────────────────

    #[test]
    fn ndc_uv_round_trip_on_a_hit() {
        let scene = QuadScene;
        let ndc = Vec2::new(0.5, -0.25);
        let uv = ndc_to_uv(&scene, ndc);
        let back = uv_to_ndc(&scene, &scene, uv);
        assert!(back.distance_max(ndc) < 1e-6);
    }

    #[test]
    fn ray_miss_yields_the_sentinel() {
        let scene = QuadScene;
        assert!(is_miss(ndc_to_uv(&scene, Vec2::new(5.0, 5.0))));
    }

    #[test]
    fn sentinel_input_stays_a_sentinel() {
        let scene = QuadScene;
        assert!(is_miss(ndc_to_uv(&scene, MISS)));
        assert!(is_miss(uv_to_ndc(&scene, &scene, MISS)));
    }
}
