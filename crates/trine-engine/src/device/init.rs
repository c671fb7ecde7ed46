use glutin::context::GlProfile;

/// Window and GL context request.
///
/// Defaults reproduce the classic 800x800 window with an OpenGL 3.3 core
/// context. Nothing here is negotiated: if the platform cannot honor the
/// request, bootstrap fails.
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Window title.
    pub title: String,

    /// Initial framebuffer width in physical pixels.
    pub width: u32,

    /// Initial framebuffer height in physical pixels.
    pub height: u32,

    /// Requested OpenGL version as `(major, minor)`.
    pub gl_version: (u8, u8),

    /// Requested GL profile. Core excludes the deprecated fixed-function API.
    pub profile: GlProfile,

    /// Wait for vertical sync on swap.
    ///
    /// This is the only frame pacing the render loop has.
    pub vsync: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            title: "trine".to_string(),
            width: 800,
            height: 800,
            gl_version: (3, 3),
            profile: GlProfile::Core,
            vsync: true,
        }
    }
}
