//! The host 3D renderer seam and the scoped state override around a pass.

use anyhow::Result;

/// Opaque handle the host uses to address a bound render target.
///
/// Allocation lives with the bridge; resolution back to a texture lives with
/// the host. `None` at the binding site means "the swapchain".
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TargetId(pub u64);

/// Ambient-state and render entry points of the consuming 3D renderer.
///
/// Consumed, never implemented here: camera math, scene traversal, and draw
/// submission all stay with the engine. The bridge only needs to swap the
/// bound target in and out and neutralize flags (auto-clear, XR) that would
/// leak into an offscreen pass.
pub trait HostRenderer {
    fn auto_clear(&self) -> bool;
    fn set_auto_clear(&mut self, on: bool);

    fn xr_enabled(&self) -> bool;
    fn set_xr_enabled(&mut self, on: bool);

    fn xr_presenting(&self) -> bool;
    fn set_xr_presenting(&mut self, on: bool);

    /// Currently bound render target; `None` is the swapchain.
    fn bound_target(&self) -> Option<TargetId>;
    fn bind_target(&mut self, target: Option<TargetId>);

    /// Renders the configured source subtree into the bound target.
    fn render(&mut self) -> Result<()>;

    /// Camera/view resize hook: logical size plus resolution (DPR).
    ///
    /// Called by the bridge when its texture dimensions change so the
    /// camera aspect and projection stay in step with the target.
    fn resize_view(&mut self, width: u32, height: u32, resolution: f32);
}

#[derive(Debug, Copy, Clone)]
struct SavedHostState {
    auto_clear: bool,
    xr_enabled: bool,
    xr_presenting: bool,
    target: Option<TargetId>,
}

/// Scoped override of the host's ambient state for one bridge pass.
///
/// Saves on construction, overrides (auto-clear on, XR off, bridge target
/// bound), and restores in `Drop` — so the surrounding render of sibling
/// content sees its own state again on every exit path, early returns and
/// panics included.
pub struct HostStateGuard<'a> {
    host: &'a mut dyn HostRenderer,
    saved: SavedHostState,
}

impl<'a> HostStateGuard<'a> {
    pub fn override_for_pass(host: &'a mut dyn HostRenderer, target: TargetId) -> Self {
        let saved = SavedHostState {
            auto_clear: host.auto_clear(),
            xr_enabled: host.xr_enabled(),
            xr_presenting: host.xr_presenting(),
            target: host.bound_target(),
        };
        host.set_auto_clear(true);
        host.set_xr_enabled(false);
        host.set_xr_presenting(false);
        host.bind_target(Some(target));
        Self { host, saved }
    }

    /// The host, with the override in place.
    #[inline]
    pub fn host(&mut self) -> &mut dyn HostRenderer {
        self.host
    }
}

impl Drop for HostStateGuard<'_> {
    fn drop(&mut self) {
        self.host.bind_target(self.saved.target);
        self.host.set_auto_clear(self.saved.auto_clear);
        self.host.set_xr_enabled(self.saved.xr_enabled);
        self.host.set_xr_presenting(self.saved.xr_presenting);
    }
}
