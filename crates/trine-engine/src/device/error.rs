use std::fmt;

/// Failure while bringing up the window and GL context.
///
/// Every variant is fatal; there is no retry or fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// The platform event loop could not be created.
    EventLoop(String),
    /// The display offered no GL config matching the template.
    NoMatchingConfig,
    /// The backend returned no window.
    WindowCreation(String),
    /// The window did not expose a usable native handle.
    WindowHandle(String),
    /// The GL context (version/profile) could not be created.
    Context(String),
    /// The drawable surface for the window could not be created.
    Surface(String),
    /// The context could not be made current on this thread.
    MakeCurrent(String),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(e) => write!(f, "failed to create event loop: {e}"),
            Self::NoMatchingConfig => write!(f, "display offered no matching GL config"),
            Self::WindowCreation(e) => write!(f, "failed to create window: {e}"),
            Self::WindowHandle(e) => write!(f, "window handle unavailable: {e}"),
            Self::Context(e) => write!(f, "failed to create GL context: {e}"),
            Self::Surface(e) => write!(f, "failed to create GL window surface: {e}"),
            Self::MakeCurrent(e) => write!(f, "failed to make GL context current: {e}"),
        }
    }
}

impl std::error::Error for BootstrapError {}

/// Failure while presenting a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    Swap(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swap(e) => write!(f, "failed to swap buffers: {e}"),
        }
    }
}

impl std::error::Error for SurfaceError {}
