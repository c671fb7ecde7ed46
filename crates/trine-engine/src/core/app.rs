use anyhow::{Context, Result};

use crate::device::{self, BootstrapError, ContextConfig, FrameSurface, GlowApi, GlutinSurface, GpuApi};
use crate::geometry::GeometryError;
use crate::render::{self, LoopReport, Scene};
use crate::shader::{ShaderError, TRIANGLE_SHADERS};

use super::config::AppConfig;

/// Exit status for a window closed by the user.
pub const EXIT_OK: i32 = 0;

/// Exit status when the window, context or GPU resources could not be set up.
pub const EXIT_STARTUP_FAILURE: i32 = -1;

/// Exit status when presenting failed after startup.
pub const EXIT_RUNTIME_FAILURE: i32 = 1;

/// A bootstrapped GPU API together with the surface it presents to.
pub struct Session<A, S> {
    pub api: A,
    pub surface: S,
}

/// Source of sessions: the real glutin/winit stack or a test double.
pub trait Backend {
    type Api: GpuApi;
    type Surface: FrameSurface;

    fn open(&mut self, config: &ContextConfig) -> Result<Session<Self::Api, Self::Surface>, BootstrapError>;
}

/// Native window + OpenGL through glutin.
#[derive(Debug, Default, Copy, Clone)]
pub struct GlutinBackend;

impl Backend for GlutinBackend {
    type Api = GlowApi;
    type Surface = GlutinSurface;

    fn open(&mut self, config: &ContextConfig) -> Result<Session<GlowApi, GlutinSurface>, BootstrapError> {
        let (api, surface) = device::bootstrap(config)?;
        Ok(Session { api, surface })
    }
}

/// Bootstraps, builds the scene, runs the render loop and tears down.
///
/// Teardown (scene release, then window destruction) runs exactly once for
/// every session that was opened, including when scene setup or the loop
/// fails. If bootstrap fails nothing else runs.
pub fn run<B: Backend>(backend: &mut B, config: &AppConfig) -> Result<LoopReport> {
    let Session { api, mut surface } = backend
        .open(&config.context)
        .context("failed to bootstrap window and GL context")?;

    let extent = surface.size();
    let (w, h) = extent.as_viewport();
    api.viewport(0, 0, w, h);

    let scene = match Scene::build(&api, &TRIANGLE_SHADERS, config.render.triangle_base) {
        Ok(scene) => scene,
        Err(e) => {
            surface.shutdown();
            return Err(e);
        }
    };

    let outcome = render::run(&api, &mut surface, &scene, &config.render);

    scene.release(&api);
    surface.shutdown();
    log::debug!("teardown complete");

    outcome.context("render loop aborted")
}

/// Maps the outcome of [`run`] to a process exit status.
pub fn exit_code_for(result: &Result<LoopReport>) -> i32 {
    let Err(err) = result else {
        return EXIT_OK;
    };

    let startup = err.chain().any(|cause| {
        cause.is::<BootstrapError>() || cause.is::<ShaderError>() || cause.is::<GeometryError>()
    });

    if startup {
        EXIT_STARTUP_FAILURE
    } else {
        EXIT_RUNTIME_FAILURE
    }
}
