use crate::device::{FrameSurface, GpuApi, SurfaceError};
use crate::paint::Color;

use super::config::RenderConfig;
use super::scene::Scene;
use super::state::LoopState;

/// Summary of a finished render loop.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct LoopReport {
    /// Frames drawn and presented inside the loop.
    pub frames: u64,
}

/// Draws `scene` until the surface reports a close request.
///
/// Each iteration: clear, bind program and vertex array, draw, present, then
/// pump events. Resizes update the GL viewport. There is no frame pacing
/// beyond what the swap itself imposes.
///
/// A failed swap ends the loop with an error; the caller still owns `scene`
/// and the surface and must tear them down.
pub fn run<A, S>(
    api: &A,
    surface: &mut S,
    scene: &Scene<A>,
    config: &RenderConfig,
) -> Result<LoopReport, SurfaceError>
where
    A: GpuApi,
    S: FrameSurface,
{
    let clear_color = config.clear_color.clamped();

    if config.clear_before_loop {
        clear(api, clear_color);
        surface.swap_buffers()?;
    }

    let mut report = LoopReport::default();
    let mut state = LoopState::Running;

    loop {
        state = state.advance(surface.should_close());
        if state == LoopState::Closing {
            break;
        }

        clear(api, clear_color);
        scene.draw(api);
        surface.swap_buffers()?;
        report.frames += 1;

        if let Some(extent) = surface.poll_events() {
            let (w, h) = extent.as_viewport();
            api.viewport(0, 0, w, h);
        }
    }

    log::info!("render loop closed after {} frames", report.frames);
    Ok(report)
}

#[inline]
fn clear<A: GpuApi>(api: &A, color: Color) {
    api.clear_color(color);
    api.clear_color_buffer();
}
