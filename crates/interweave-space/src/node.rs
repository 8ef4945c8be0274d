/// Identifier of a node in the retained 2D scene graph.
///
/// Allocation and meaning belong to the 2D graph; this crate only threads
/// the handle through hit paths and embedding records.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(pub u64);

/// Identifier of a 3D surface a texture can be attached to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SurfaceId(pub u64);
