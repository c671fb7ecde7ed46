//! Shader compilation and program linking.

mod builder;
mod error;

pub use builder::{Program, ShaderSources, TRIANGLE_SHADERS};
pub use error::ShaderError;
