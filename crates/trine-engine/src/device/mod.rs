//! Window + GL context management.
//!
//! This module is responsible for:
//! - creating the winit window and the OpenGL context/surface through glutin
//! - exposing GL to the rest of the crate through the [`GpuApi`] seam
//! - presenting frames and pumping window events

mod api;
mod context;
mod error;
mod glow_api;
mod init;
mod surface;
mod window;

pub use api::{BufferUsage, GpuApi, ShaderStage, Topology, VertexAttrib};
pub use context::bootstrap;
pub use error::{BootstrapError, SurfaceError};
pub use glow_api::GlowApi;
pub use init::ContextConfig;
pub use surface::{Extent, FrameSurface};
pub use window::GlutinSurface;
