use super::Vec2;

/// Canvas-local viewport in pixels, device-pixel-ratio aware.
///
/// `width`/`height` are the drawable size the 2D and 3D renderers agree on;
/// `scale_factor` records the DPR used to derive them from logical size.
/// Client↔Viewport mappings scale by the bound element's rendered rect, so
/// they stay correct under CSS scaling independent of the DPR.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scale_factor: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32, scale_factor: f32) -> Self {
        Self {
            width,
            height,
            scale_factor,
        }
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.width.is_finite()
            && self.height.is_finite()
            && self.scale_factor > 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}
