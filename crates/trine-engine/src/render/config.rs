use crate::paint::Color;

/// Per-frame rendering parameters.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Color the framebuffer is cleared to every frame.
    pub clear_color: Color,

    /// Clear and present once before the first event poll, so the window
    /// shows the background instead of undefined contents.
    pub clear_before_loop: bool,

    /// Side length of the triangle in normalized device coordinates.
    pub triangle_base: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::BACKGROUND,
            clear_before_loop: true,
            triangle_base: 1.0,
        }
    }
}
