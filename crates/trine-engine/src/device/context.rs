use std::any::Any;
use std::num::NonZeroU32;
use std::panic::{self, AssertUnwindSafe};

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{ContextApi, ContextAttributesBuilder, NotCurrentGlContext, Version};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowAttributes};

use super::error::BootstrapError;
use super::glow_api::GlowApi;
use super::init::ContextConfig;
use super::window::GlutinSurface;

/// Creates the window, GL context and surface, and loads GL entry points.
///
/// Steps, in order:
/// - create the winit event loop
/// - pick a GL config and create the window with it
/// - create a context with the requested version and profile
/// - create the window surface and make the context current
/// - set the swap interval (vsync) and load GL through `glow`
///
/// A missing window is [`BootstrapError::WindowCreation`]; no GL call is
/// made in that case.
pub fn bootstrap(config: &ContextConfig) -> Result<(GlowApi, GlutinSurface), BootstrapError> {
    let event_loop = EventLoop::new().map_err(|e| BootstrapError::EventLoop(e.to_string()))?;

    let attrs = Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(PhysicalSize::new(config.width, config.height));

    let (window, gl_config) = build_window(&event_loop, attrs)?;

    let window = window.ok_or_else(|| {
        BootstrapError::WindowCreation("display builder returned no window".to_string())
    })?;

    let raw_window_handle = window
        .window_handle()
        .map_err(|e| BootstrapError::WindowHandle(e.to_string()))?
        .as_raw();

    let gl_display = gl_config.display();

    let (major, minor) = config.gl_version;
    let context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
        .with_profile(config.profile)
        .build(Some(raw_window_handle));

    let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
        .map_err(|e| BootstrapError::Context(e.to_string()))?;

    let inner = window.inner_size();
    let surface_attributes = SurfaceAttributesBuilder::<WindowSurface>::new().build(
        raw_window_handle,
        non_zero(inner.width),
        non_zero(inner.height),
    );

    let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
        .map_err(|e| BootstrapError::Surface(e.to_string()))?;

    let context = not_current
        .make_current(&gl_surface)
        .map_err(|e| BootstrapError::MakeCurrent(e.to_string()))?;

    if config.vsync {
        if let Err(e) = gl_surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
            log::warn!("vsync unavailable, presenting unsynchronized: {e}");
        }
    }

    // SAFETY: the context was made current on this thread above and the
    // returned surface keeps it alive (and current) until shutdown.
    let api = unsafe { GlowApi::load(|symbol| gl_display.get_proc_address(symbol)) };

    let (version, renderer) = api.driver_info();
    log::info!(
        "GL {major}.{minor} {:?} context ready: {version} ({renderer})",
        config.profile
    );

    Ok((api, GlutinSurface::new(event_loop, window, gl_surface, context)))
}

/// Picks a GL config and creates the window with it.
///
/// `DisplayBuilder` gives the picker no way to fail, and glutin can hand it
/// an empty set (EGL filters configs after the driver query). The picker
/// unwinds with [`NoMatchingConfig`] in that case and the unwind is turned
/// back into [`BootstrapError::NoMatchingConfig`] here.
fn build_window(
    event_loop: &EventLoop<()>,
    attrs: WindowAttributes,
) -> Result<(Option<Window>, Config), BootstrapError> {
    let built = panic::catch_unwind(AssertUnwindSafe(|| {
        DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(event_loop, ConfigTemplateBuilder::new(), pick_config)
    }));

    match built {
        Ok(Ok(pair)) => Ok(pair),
        Ok(Err(e)) => Err(BootstrapError::WindowCreation(e.to_string())),
        Err(payload) => Err(config_unwind_error(payload)),
    }
}

/// Unwind payload raised by [`pick_config`] when nothing matched.
#[derive(Debug)]
struct NoMatchingConfig;

fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    match fewest_samples(configs, |c| c.num_samples()) {
        Some(config) => config,
        None => panic::panic_any(NoMatchingConfig),
    }
}

/// Prefers the candidate with the fewest samples; the triangle needs no MSAA.
fn fewest_samples<T>(candidates: impl Iterator<Item = T>, samples: impl Fn(&T) -> u8) -> Option<T> {
    candidates.min_by_key(|c| samples(c))
}

/// Maps the picker's unwind to an error. Any other panic keeps unwinding.
fn config_unwind_error(payload: Box<dyn Any + Send>) -> BootstrapError {
    if payload.is::<NoMatchingConfig>() {
        BootstrapError::NoMatchingConfig
    } else {
        panic::resume_unwind(payload)
    }
}

fn non_zero(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap_or(NonZeroU32::MIN)
}
