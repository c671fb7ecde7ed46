/// Straight (non-premultiplied) RGBA color with `f32` channels in `[0, 1]`.
///
/// Used for the framebuffer clear color. The triangle's fill color lives in
/// the fragment shader source.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Dark slate used behind the triangle.
    pub const BACKGROUND: Color = Color::rgba(0.07, 0.13, 0.17, 1.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Clamps every channel to `[0, 1]`. Non-finite channels become 0.
    #[inline]
    pub fn clamped(self) -> Self {
        fn unit(v: f32) -> f32 {
            if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
        }
        Self::rgba(unit(self.r), unit(self.g), unit(self.b), unit(self.a))
    }
}
