//! trine engine crate.
//!
//! Opens one window with an OpenGL 3.3 core context, compiles a fixed shader
//! pair, uploads a single equilateral triangle and redraws it until the
//! window is closed.

pub mod core;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod render;
pub mod shader;

#[cfg(test)]
mod testing;
