//! Synthetic pointer events over two native hit-testing mechanisms.
//!
//! Responsibilities:
//! - map raw input (DOM pointer/wheel events, 3D raycast events) to a point
//!   in the 2D tree's local space
//! - hit-test that point through the externally supplied [`EventBoundary`]
//! - reproduce DOM pointer semantics on the result: over/out, enter/leave
//!   along ancestor chains, bubbling primary delivery, per-pointer hover state
//!
//! One [`EventSystem`] exists per input source. The raw-to-point step is the
//! only part that differs between sources, so it is a closed set of adapter
//! variants ([`PointSource`]) selected at construction.

pub mod bind;
pub mod boundary;
pub mod dom;
pub mod raycast;
pub mod system;
pub mod types;

pub use bind::{Bindings, HandlerTable};
pub use boundary::{EventBoundary, EventResult, EventSink, SyntheticEvent};
pub use dom::{DomElement, DomMapper};
pub use raycast::{map_uv_to_point, RaycastMapper};
pub use system::{EventSystem, PointSource};
pub use types::{DomEvent, EventKind, PointerId, RawEvent, RaycastEvent, WheelDelta};
