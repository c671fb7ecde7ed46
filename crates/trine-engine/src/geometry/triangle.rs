use bytemuck::{Pod, Zeroable};

use crate::device::VertexAttrib;

/// Object-space vertex: position only.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    /// Layout of [`Vertex`] for shader input slot 0: three tightly packed
    /// floats at offset zero.
    pub const ATTRIB: VertexAttrib = VertexAttrib {
        location: 0,
        components: 3,
        stride: std::mem::size_of::<Vertex>() as i32,
        offset: 0,
        normalized: false,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}

/// Equilateral triangle with side `base`, lying in the z = 0 plane.
///
/// The base is horizontal and the centroid sits at the origin: the bottom
/// edge is at `-h/3` and the apex at `2h/3`, where `h = base * sqrt(3) / 2`.
pub fn equilateral_triangle(base: f32) -> [Vertex; 3] {
    let half = base * 0.5;
    let sqrt3 = 3.0f32.sqrt();
    let bottom = -half * sqrt3 / 3.0;
    let apex = half * sqrt3 * 2.0 / 3.0;

    [
        Vertex::new(-half, bottom, 0.0),
        Vertex::new(half, bottom, 0.0),
        Vertex::new(0.0, apex, 0.0),
    ]
}
