use std::num::NonZeroU32;
use std::time::Duration;

use glutin::context::PossiblyCurrentContext;
use glutin::surface::{GlSurface, Surface, WindowSurface};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use super::error::SurfaceError;
use super::surface::{Extent, FrameSurface};

/// Collects the window events the render loop cares about between pumps.
#[derive(Debug, Default)]
struct EventSink {
    window_id: Option<WindowId>,
    close_requested: bool,
    resized: Option<PhysicalSize<u32>>,
}

impl ApplicationHandler for EventSink {
    // The window already exists when the loop is first pumped.
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window_id.is_some_and(|id| id != window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                log::debug!("close requested");
                self.close_requested = true;
            }
            WindowEvent::Resized(size) => {
                self.resized = Some(size);
            }
            _ => {}
        }
    }
}

/// Window, GL surface and current context for the lifetime of the process.
///
/// Fields drop in declaration order: surface, context, window, event loop.
pub struct GlutinSurface {
    gl_surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
    event_loop: EventLoop<()>,
    sink: EventSink,
    size: Extent,
}

impl GlutinSurface {
    pub(crate) fn new(
        event_loop: EventLoop<()>,
        window: Window,
        gl_surface: Surface<WindowSurface>,
        context: PossiblyCurrentContext,
    ) -> Self {
        let inner = window.inner_size();
        let sink = EventSink {
            window_id: Some(window.id()),
            ..EventSink::default()
        };

        Self {
            gl_surface,
            context,
            window,
            event_loop,
            sink,
            size: Extent::new(inner.width, inner.height),
        }
    }

    fn apply_resize(&mut self, size: PhysicalSize<u32>) -> Option<Extent> {
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            // Minimized; keep the previous drawable.
            return None;
        };

        self.gl_surface.resize(&self.context, w, h);
        self.size = Extent::new(size.width, size.height);
        log::debug!("surface resized to {}x{}", size.width, size.height);
        Some(self.size)
    }
}

impl FrameSurface for GlutinSurface {
    fn size(&self) -> Extent {
        self.size
    }

    fn should_close(&self) -> bool {
        self.sink.close_requested
    }

    fn swap_buffers(&mut self) -> Result<(), SurfaceError> {
        self.window.pre_present_notify();
        self.gl_surface
            .swap_buffers(&self.context)
            .map_err(|e| SurfaceError::Swap(e.to_string()))
    }

    fn poll_events(&mut self) -> Option<Extent> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.sink);

        if let PumpStatus::Exit(code) = status {
            log::debug!("event loop exited with code {code}");
            self.sink.close_requested = true;
        }

        let resized = self.sink.resized.take()?;
        self.apply_resize(resized)
    }

    fn shutdown(self) {
        let Self {
            gl_surface,
            context,
            window,
            event_loop,
            ..
        } = self;

        drop(gl_surface);
        drop(context);
        drop(window);
        drop(event_loop);

        log::debug!("window and GL context destroyed");
    }
}
