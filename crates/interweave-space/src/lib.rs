//! Coordinate spaces and bijections for composing scene graphs.
//!
//! Responsibilities:
//! - shared coordinate vocabulary ([`Vec2`], [`Vec3`], [`Rect`], [`Viewport`])
//! - pure mapping pairs between adjacent spaces (module [`space`])
//! - collaborator traits the mappings are parameterized over (module [`collab`])
//! - the per-view mapping capability set ([`SpaceMap`]) including the optional
//!   parent-surface composition across an embedding boundary
//!
//! Six spaces are involved when a 2D scene is rendered onto a 3D surface:
//! Client (DOM pixels), Viewport (canvas pixels), NDC ([-1, 1], y up),
//! UV ([0, 1] on the hit surface), 2D-Local (a plane node's own frame), and
//! World (3D world units). Every mapping here is a named bijection between
//! two adjacent spaces; multi-hop mappings are explicit compositions.

mod error;
mod node;
mod rect;
mod vec2;
mod vec3;
mod viewport;

pub mod collab;
pub mod map;
pub mod space;

pub use error::NotInScope;
pub use map::{ParentSurface, SpaceMap};
pub use node::{NodeId, SurfaceId};
pub use rect::Rect;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use viewport::Viewport;
