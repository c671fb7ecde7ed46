//! The narrow slice of OpenGL the engine relies on.
//!
//! Everything above `device` talks to the GPU through [`GpuApi`] so that the
//! shader builder, geometry uploader and render loop can be exercised
//! against a recording implementation in tests.

use std::fmt::Debug;

use crate::paint::Color;

/// Shader stage kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }
}

/// Usage hint for buffer storage.
///
/// A performance hint only; the driver must accept any access pattern.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferUsage {
    /// Written once, drawn many times.
    StaticDraw,
}

/// Primitive topology for draw calls.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Topology {
    Triangles,
}

/// Float vertex attribute descriptor (`glVertexAttribPointer` arguments).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttrib {
    /// Shader input slot (`layout(location = N)`).
    pub location: u32,
    /// Number of `f32` components per vertex.
    pub components: i32,
    /// Byte distance between consecutive vertices.
    pub stride: i32,
    /// Byte offset of the first component within the buffer.
    pub offset: i32,
    pub normalized: bool,
}

/// GPU driver calls used by the engine.
///
/// Handles are plain copyable ids; ownership is tracked by the types built on
/// top of this trait, not by the handles themselves. Creation calls return
/// the driver's message on failure.
pub trait GpuApi {
    type Shader: Copy + Eq + Debug;
    type Program: Copy + Eq + Debug;
    type Buffer: Copy + Eq + Debug;
    type VertexArray: Copy + Eq + Debug;

    // ── shaders ───────────────────────────────────────────────────────────

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    // ── programs ──────────────────────────────────────────────────────────

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    // ── vertex state ──────────────────────────────────────────────────────

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Replaces the storage of the currently bound array buffer.
    fn array_buffer_data(&self, data: &[u8], usage: BufferUsage);
    fn delete_buffer(&self, buffer: Self::Buffer);

    /// Describes a float attribute of the bound array buffer for the bound
    /// vertex array.
    fn vertex_attrib_pointer_f32(&self, attrib: VertexAttrib);
    fn enable_vertex_attrib_array(&self, location: u32);

    // ── framebuffer ───────────────────────────────────────────────────────

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, color: Color);
    /// Clears the color buffer with the current clear color.
    fn clear_color_buffer(&self);
    fn draw_arrays(&self, topology: Topology, first: i32, count: i32);
}
