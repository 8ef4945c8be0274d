//! The render-to-texture bridge.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};

use crate::demand::FrameRequest;
use crate::host::{HostRenderer, HostStateGuard, TargetId};
use crate::target::{SurfaceTarget, TargetOptions};

static NEXT_TARGET_ID: AtomicU64 = AtomicU64::new(1);

/// Refresh policy deciding which ticks re-render the source subtree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameBudget {
    /// Re-render on every tick.
    Always,
    /// Render the first `n` ticks, then stop. `Count(0)` never renders —
    /// that is how a consumer freezes content.
    Count(u32),
    /// Render only on ticks where the embedding's frame request is set.
    OnInvalidate,
}

impl FrameBudget {
    /// Whether a tick with `rendered` passes done and the given request
    /// state should render.
    #[inline]
    pub fn allows(self, rendered: u32, requested: bool) -> bool {
        match self {
            FrameBudget::Always => true,
            FrameBudget::Count(n) => rendered < n,
            FrameBudget::OnInvalidate => requested,
        }
    }
}

/// Bridge construction/update contract.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeOptions {
    /// Logical texture width.
    pub width: u32,
    /// Logical texture height.
    pub height: u32,
    /// Backing-store scale (DPR).
    pub resolution: f32,
    pub frames: FrameBudget,
    /// Ordering key among sibling bridges within the host frame loop;
    /// lower renders first.
    pub render_priority: i32,
    pub target: TargetOptions,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            resolution: 1.0,
            frames: FrameBudget::Always,
            render_priority: 0,
            target: TargetOptions::default(),
        }
    }
}

/// Callback receiving the native texture handle after each render pass.
pub type TextureCallback = Box<dyn FnMut(&wgpu::Texture)>;

/// Replacement render pipeline (post-processing) run instead of the host's
/// plain scene render.
pub type PostProcess = Box<dyn FnMut(&mut dyn HostRenderer) -> Result<()>>;

/// Owns one embedding's render target and re-renders the source subtree
/// into it on the configured cadence.
///
/// A fresh bridge starts with a zero pass counter: remounting an embedding
/// restarts a `Count(n)` budget from the beginning.
pub struct TextureBridge {
    id: TargetId,
    target: SurfaceTarget,
    options: BridgeOptions,
    rendered: u32,
    request: Rc<FrameRequest>,
    on_texture_update: Option<TextureCallback>,
    post_process: Option<PostProcess>,
}

impl TextureBridge {
    pub fn new(device: &wgpu::Device, options: BridgeOptions, request: Rc<FrameRequest>) -> Self {
        let target = SurfaceTarget::new(
            device,
            options.width,
            options.height,
            options.resolution,
            options.target.clone(),
        );
        Self {
            id: TargetId(NEXT_TARGET_ID.fetch_add(1, Ordering::Relaxed)),
            target,
            options,
            rendered: 0,
            request,
            on_texture_update: None,
            post_process: None,
        }
    }

    /// The handle the host resolves when this bridge's target is bound.
    #[inline]
    pub fn target_id(&self) -> TargetId {
        self.id
    }

    #[inline]
    pub fn render_priority(&self) -> i32 {
        self.options.render_priority
    }

    /// The native texture handle, for consumers that attach it directly.
    #[inline]
    pub fn texture(&self) -> &wgpu::Texture {
        self.target.texture()
    }

    #[inline]
    pub fn surface_target(&self) -> &SurfaceTarget {
        &self.target
    }

    #[inline]
    pub fn frame_request(&self) -> &Rc<FrameRequest> {
        &self.request
    }

    pub fn set_on_texture_update(&mut self, callback: Option<TextureCallback>) {
        self.on_texture_update = callback;
    }

    pub fn set_post_process(&mut self, post: Option<PostProcess>) {
        self.post_process = post;
    }

    /// Applies an options update.
    ///
    /// Sizing changes (width, height, resolution, samples, format, depth)
    /// re-provision the render target, notify the host view of the new
    /// dimensions, and request a redraw.
    pub fn update(
        &mut self,
        device: &wgpu::Device,
        options: BridgeOptions,
        host: &mut dyn HostRenderer,
    ) {
        let resize = options.width != self.options.width
            || options.height != self.options.height
            || options.resolution != self.options.resolution
            || options.target != self.options.target;
        if resize {
            self.target.resize(
                device,
                options.width,
                options.height,
                options.resolution,
                options.target.clone(),
            );
            host.resize_view(options.width, options.height, options.resolution);
            self.request.invalidate();
        }
        self.options = options;
    }

    /// One host frame tick. Renders if the budget allows; returns whether a
    /// pass ran.
    ///
    /// On a pass: host ambient state is overridden behind a guard, the
    /// source subtree (or post-processing pipeline) renders into this
    /// bridge's target, the texture handle goes to `on_texture_update`, and
    /// the guard restores host state — also when the render errors out.
    pub fn tick(&mut self, host: &mut dyn HostRenderer) -> Result<bool> {
        let ran = tick_once(
            self.options.frames,
            &mut self.rendered,
            &self.request,
            host,
            self.id,
            self.post_process.as_mut(),
        )?;
        if ran && let Some(callback) = &mut self.on_texture_update {
            callback(self.target.texture());
        }
        Ok(ran)
    }
}

/// One gate-render-clear cycle: the whole of [`TextureBridge::tick`] except
/// handing out the texture. Split off so tick behavior is checkable without
/// a GPU device.
pub(crate) fn tick_once(
    budget: FrameBudget,
    rendered: &mut u32,
    request: &FrameRequest,
    host: &mut dyn HostRenderer,
    target: TargetId,
    post_process: Option<&mut PostProcess>,
) -> Result<bool> {
    if !budget.allows(*rendered, request.is_requested()) {
        return Ok(false);
    }

    run_pass(host, target, post_process).context("bridge render pass failed")?;

    *rendered = rendered.saturating_add(1);
    request.clear_frame_request();
    Ok(true)
}

/// Runs one guarded render pass against `host`.
pub(crate) fn run_pass(
    host: &mut dyn HostRenderer,
    target: TargetId,
    post_process: Option<&mut PostProcess>,
) -> Result<()> {
    let mut guard = HostStateGuard::override_for_pass(host, target);
    match post_process {
        Some(post) => post(guard.host()),
        None => guard.host().render(),
    }
}
