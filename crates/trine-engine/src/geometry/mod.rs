//! Triangle geometry and its one-time upload.

mod error;
mod mesh;
mod triangle;

pub use error::GeometryError;
pub use mesh::TriangleMesh;
pub use triangle::{equilateral_triangle, Vertex};
