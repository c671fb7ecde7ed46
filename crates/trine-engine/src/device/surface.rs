use super::error::SurfaceError;

/// Framebuffer size in physical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Size as the signed pair GL viewport calls expect, saturating at
    /// `i32::MAX`.
    #[inline]
    pub fn as_viewport(self) -> (i32, i32) {
        (
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }
}

/// Presentation side of a session: the window's drawable plus its event pump.
pub trait FrameSurface {
    /// Current drawable size.
    fn size(&self) -> Extent;

    /// Whether the window has been asked to close.
    fn should_close(&self) -> bool;

    /// Presents the back buffer.
    fn swap_buffers(&mut self) -> Result<(), SurfaceError>;

    /// Drains pending window events without blocking.
    ///
    /// Returns the newest non-empty drawable size if the window was resized
    /// since the previous call.
    fn poll_events(&mut self) -> Option<Extent>;

    /// Destroys the window and its drawable.
    fn shutdown(self)
    where
        Self: Sized,
    {
    }
}
