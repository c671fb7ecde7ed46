use crate::device::{BufferUsage, GpuApi, Topology};

use super::error::GeometryError;
use super::triangle::Vertex;

/// Static vertex data living on the GPU, plus the vertex array describing it.
#[derive(Debug)]
pub struct TriangleMesh<A: GpuApi> {
    vao: A::VertexArray,
    vbo: A::Buffer,
    vertex_count: i32,
}

impl<A: GpuApi> TriangleMesh<A> {
    /// Uploads `vertices` once with a static-draw hint.
    ///
    /// Binding order: the vertex array is bound before the buffer, and both
    /// are bound before the attribute is registered. Afterwards the buffer and
    /// then the vertex array are unbound so later calls cannot modify them.
    pub fn upload(api: &A, vertices: &[Vertex]) -> Result<Self, GeometryError> {
        let vao = api
            .create_vertex_array()
            .map_err(GeometryError::CreateVertexArray)?;

        let vbo = match api.create_buffer() {
            Ok(vbo) => vbo,
            Err(e) => {
                api.delete_vertex_array(vao);
                return Err(GeometryError::CreateBuffer(e));
            }
        };

        api.bind_vertex_array(Some(vao));
        api.bind_array_buffer(Some(vbo));

        api.array_buffer_data(bytemuck::cast_slice(vertices), BufferUsage::StaticDraw);

        api.vertex_attrib_pointer_f32(Vertex::ATTRIB);
        api.enable_vertex_attrib_array(Vertex::ATTRIB.location);

        api.bind_array_buffer(None);
        api.bind_vertex_array(None);

        let vertex_count = i32::try_from(vertices.len()).unwrap_or(i32::MAX);
        log::info!("uploaded {vertex_count} vertices ({} bytes)", std::mem::size_of_val(vertices));

        Ok(Self {
            vao,
            vbo,
            vertex_count,
        })
    }

    #[inline]
    pub fn bind(&self, api: &A) {
        api.bind_vertex_array(Some(self.vao));
    }

    /// Draws the whole mesh as a triangle list. The mesh must be bound.
    #[inline]
    pub fn draw(&self, api: &A) {
        api.draw_arrays(Topology::Triangles, 0, self.vertex_count);
    }

    pub fn release(self, api: &A) {
        api.delete_vertex_array(self.vao);
        api.delete_buffer(self.vbo);
        log::debug!("vertex array {:?} and buffer {:?} deleted", self.vao, self.vbo);
    }
}
