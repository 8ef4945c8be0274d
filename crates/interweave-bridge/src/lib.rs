//! Render-to-texture bridge between two independently-clocked scene graphs.
//!
//! Responsibilities:
//! - own the GPU render target one graph renders into and the other samples
//! - decide each tick whether to re-render (frame budget / invalidation)
//! - keep the host renderer's ambient state intact around every bridge pass
//! - bubble "needs redraw" requests up through nested embeddings
//!
//! The 3D frame callback drives the bridge, and the bridge performs a full
//! source render pass before returning, so a bridge render always causally
//! precedes the 3D draw that consumes its texture within the same frame.
//! Everything here is single-threaded and synchronous; there is no in-flight
//! work to cancel on unmount — dropping an [`Embedding`] releases its GPU
//! resources.

pub mod bridge;
pub mod demand;
pub mod embedding;
pub mod host;
pub mod logging;
pub mod target;

pub use bridge::{BridgeOptions, FrameBudget, TextureBridge};
pub use demand::FrameRequest;
pub use embedding::Embedding;
pub use host::{HostRenderer, HostStateGuard, TargetId};
pub use logging::{init_logging, LoggingConfig};
pub use target::{SurfaceTarget, TargetOptions};
