//! The embedding record: one scene graph's output nested inside another's
//! surface.

use std::rc::Rc;

use anyhow::Result;

use interweave_space::{NodeId, SurfaceId};

use crate::bridge::{BridgeOptions, TextureBridge};
use crate::demand::FrameRequest;
use crate::host::HostRenderer;

/// A directed edge: `source` (a 2D subtree root) rendered into a texture
/// attached to `surface` (a 3D mesh), or the sprite-side inverse.
///
/// Embeddings form a tree by construction order — a child is always mounted
/// with its already-existing parent's frame request, so a source subtree can
/// never contain its own target and no runtime cycle detection is needed.
///
/// Mounting provisions the GPU target; dropping the embedding releases it
/// unconditionally, along with its callbacks. There is no asynchronous
/// render in flight to cancel.
pub struct Embedding {
    source: NodeId,
    surface: SurfaceId,
    bridge: TextureBridge,
}

impl Embedding {
    /// Mounts an embedding, nesting its frame request under `parent` when
    /// one encloses it.
    pub fn mount(
        device: &wgpu::Device,
        source: NodeId,
        surface: SurfaceId,
        options: BridgeOptions,
        parent: Option<&Rc<FrameRequest>>,
    ) -> Self {
        let request = match parent {
            Some(parent) => FrameRequest::nested(parent),
            None => FrameRequest::root(),
        };
        log::debug!(
            "mounting embedding: node {:?} -> surface {:?} ({}x{})",
            source,
            surface,
            options.width,
            options.height
        );
        let bridge = TextureBridge::new(device, options, request);
        Self {
            source,
            surface,
            bridge,
        }
    }

    #[inline]
    pub fn source(&self) -> NodeId {
        self.source
    }

    #[inline]
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    #[inline]
    pub fn bridge(&self) -> &TextureBridge {
        &self.bridge
    }

    #[inline]
    pub fn bridge_mut(&mut self) -> &mut TextureBridge {
        &mut self.bridge
    }

    /// This embedding's frame request, for nesting children under it.
    #[inline]
    pub fn frame_request(&self) -> &Rc<FrameRequest> {
        self.bridge.frame_request()
    }

    /// Marks this embedding (and its ancestors) for redraw.
    pub fn invalidate(&self) {
        self.bridge.frame_request().invalidate();
    }

    /// Drives the bridge for one host frame tick.
    pub fn tick(&mut self, host: &mut dyn HostRenderer) -> Result<bool> {
        self.bridge.tick(host)
    }
}
