use anyhow::{Context, Result};

use crate::device::GpuApi;
use crate::geometry::{equilateral_triangle, TriangleMesh};
use crate::shader::{Program, ShaderSources};

/// Everything drawn each frame: one program and one mesh.
#[derive(Debug)]
pub struct Scene<A: GpuApi> {
    program: Program<A>,
    mesh: TriangleMesh<A>,
}

impl<A: GpuApi> Scene<A> {
    /// Builds the program, then uploads a triangle of side `base`.
    ///
    /// If the upload fails the already linked program is released.
    pub fn build(api: &A, shaders: &ShaderSources, base: f32) -> Result<Self> {
        let program = Program::build(api, shaders).context("failed to build shader program")?;

        let mesh = match TriangleMesh::upload(api, &equilateral_triangle(base)) {
            Ok(mesh) => mesh,
            Err(e) => {
                program.release(api);
                return Err(e).context("failed to upload triangle");
            }
        };

        Ok(Self { program, mesh })
    }

    /// Binds program and vertex array and issues the draw call.
    pub fn draw(&self, api: &A) {
        self.program.bind(api);
        self.mesh.bind(api);
        self.mesh.draw(api);
    }

    /// Releases the vertex array, the buffer and the program.
    pub fn release(self, api: &A) {
        self.mesh.release(api);
        self.program.release(api);
    }
}
