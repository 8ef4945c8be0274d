//! GPU render-target provisioning.

/// Creation options for the bridge's render target.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetOptions {
    pub format: wgpu::TextureFormat,
    /// Multisample count; 1 disables MSAA.
    pub samples: u32,
    /// Provision an auxiliary depth texture alongside the color target.
    pub depth: bool,
}

impl Default for TargetOptions {
    fn default() -> Self {
        Self {
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            samples: 1,
            depth: false,
        }
    }
}

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// The color (and optional depth) textures one embedding renders into.
///
/// Dimensions are `width × height` logical units at `resolution` (DPR).
/// Dropping the target releases the GPU resources; re-provisioning on resize
/// releases the old textures before allocating replacements.
pub struct SurfaceTarget {
    color: wgpu::Texture,
    color_view: wgpu::TextureView,
    depth: Option<wgpu::Texture>,
    depth_view: Option<wgpu::TextureView>,
    width_px: u32,
    height_px: u32,
    options: TargetOptions,
}

fn pixel_extent(logical: u32, resolution: f32) -> u32 {
    ((logical as f32 * resolution).round() as u32).max(1)
}

impl SurfaceTarget {
    pub fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        resolution: f32,
        options: TargetOptions,
    ) -> Self {
        let width_px = pixel_extent(width, resolution);
        let height_px = pixel_extent(height, resolution);

        let color = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("interweave bridge color"),
            size: wgpu::Extent3d {
                width: width_px,
                height: height_px,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: options.samples,
            dimension: wgpu::TextureDimension::D2,
            format: options.format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let color_view = color.create_view(&wgpu::TextureViewDescriptor::default());

        let depth = options.depth.then(|| {
            device.create_texture(&wgpu::TextureDescriptor {
                label: Some("interweave bridge depth"),
                size: wgpu::Extent3d {
                    width: width_px,
                    height: height_px,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: options.samples,
                dimension: wgpu::TextureDimension::D2,
                format: DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            })
        });
        let depth_view = depth
            .as_ref()
            .map(|t| t.create_view(&wgpu::TextureViewDescriptor::default()));

        log::debug!("provisioned bridge target {width_px}x{height_px} (samples {})", options.samples);

        Self {
            color,
            color_view,
            depth,
            depth_view,
            width_px,
            height_px,
            options,
        }
    }

    /// Re-provisions for new dimensions/options.
    ///
    /// The old textures are destroyed before the replacements are allocated,
    /// so peak memory stays at one target even on large resizes.
    pub fn resize(
        &mut self,
        device: &wgpu::Device,
        width: u32,
        height: u32,
        resolution: f32,
        options: TargetOptions,
    ) {
        self.color.destroy();
        if let Some(depth) = &self.depth {
            depth.destroy();
        }
        *self = Self::new(device, width, height, resolution, options);
    }

    /// The native texture handle consumers attach to a material.
    #[inline]
    pub fn texture(&self) -> &wgpu::Texture {
        &self.color
    }

    #[inline]
    pub fn color_view(&self) -> &wgpu::TextureView {
        &self.color_view
    }

    #[inline]
    pub fn depth_view(&self) -> Option<&wgpu::TextureView> {
        self.depth_view.as_ref()
    }

    #[inline]
    pub fn has_depth(&self) -> bool {
        self.depth.is_some()
    }

    /// Current backing-store size in pixels.
    #[inline]
    pub fn size_px(&self) -> (u32, u32) {
        (self.width_px, self.height_px)
    }

    #[inline]
    pub fn options(&self) -> &TargetOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── pixel sizing ──────────────────────────────────────────────────────

    #[test]
    fn pixel_extent_scales_and_rounds() {
        assert_eq!(pixel_extent(100, 1.0), 100);
        assert_eq!(pixel_extent(100, 2.0), 200);
        assert_eq!(pixel_extent(101, 1.5), 152); // 151.5 rounds up
    }

    #[test]
    fn pixel_extent_never_zero() {
        assert_eq!(pixel_extent(0, 1.0), 1);
        assert_eq!(pixel_extent(10, 0.0), 1);
    }
}
