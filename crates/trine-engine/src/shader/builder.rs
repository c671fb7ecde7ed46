use crate::device::{GpuApi, ShaderStage};

use super::error::ShaderError;

/// Vertex + fragment source pair for one program.
#[derive(Debug, Copy, Clone)]
pub struct ShaderSources {
    pub vertex: &'static str,
    pub fragment: &'static str,
}

/// Pass-through position shader with a constant orange fill.
pub const TRIANGLE_SHADERS: ShaderSources = ShaderSources {
    vertex: include_str!("shaders/triangle.vert"),
    fragment: include_str!("shaders/triangle.frag"),
};

/// A linked GPU program.
///
/// Owns the program object; [`Program::release`] consumes it so the object is
/// deleted at most once.
#[derive(Debug)]
pub struct Program<A: GpuApi> {
    handle: A::Program,
}

impl<A: GpuApi> Program<A> {
    /// Compiles both stages, links them, and discards the stage objects.
    ///
    /// Compile and link status are checked. On any failure every object
    /// created so far is deleted before the error is returned.
    pub fn build(api: &A, sources: &ShaderSources) -> Result<Self, ShaderError> {
        let vertex = compile(api, ShaderStage::Vertex, sources.vertex)?;

        let fragment = match compile(api, ShaderStage::Fragment, sources.fragment) {
            Ok(shader) => shader,
            Err(e) => {
                api.delete_shader(vertex);
                return Err(e);
            }
        };

        let linked = link(api, vertex, fragment);

        // The program keeps what it needs; the stage objects are done either way.
        api.delete_shader(vertex);
        api.delete_shader(fragment);

        let handle = linked?;
        log::info!("shader program linked");
        Ok(Self { handle })
    }

    pub fn handle(&self) -> A::Program {
        self.handle
    }

    /// Makes this program current for subsequent draws.
    #[inline]
    pub fn bind(&self, api: &A) {
        api.use_program(Some(self.handle));
    }

    pub fn release(self, api: &A) {
        api.delete_program(self.handle);
        log::debug!("program {:?} deleted", self.handle);
    }
}

fn compile<A: GpuApi>(api: &A, stage: ShaderStage, source: &str) -> Result<A::Shader, ShaderError> {
    let shader = api
        .create_shader(stage)
        .map_err(|reason| ShaderError::CreateShader { stage, reason })?;

    api.shader_source(shader, source);
    api.compile_shader(shader);

    if !api.shader_compile_status(shader) {
        let log = api.shader_info_log(shader);
        api.delete_shader(shader);
        return Err(ShaderError::Compile { stage, log });
    }

    log::debug!("{} shader compiled", stage.name());
    Ok(shader)
}

fn link<A: GpuApi>(api: &A, vertex: A::Shader, fragment: A::Shader) -> Result<A::Program, ShaderError> {
    let program = api
        .create_program()
        .map_err(|reason| ShaderError::CreateProgram { reason })?;

    api.attach_shader(program, vertex);
    api.attach_shader(program, fragment);
    api.link_program(program);

    if !api.program_link_status(program) {
        let log = api.program_info_log(program);
        api.delete_program(program);
        return Err(ShaderError::Link { log });
    }

    api.detach_shader(program, vertex);
    api.detach_shader(program, fragment);

    Ok(program)
}
