//! Frame rendering.
//!
//! One program, one vertex array, one draw call per frame. The loop runs on
//! the thread that owns the GL context and stops when the window asks to
//! close.

mod config;
mod frame_loop;
mod scene;
mod state;

pub use config::RenderConfig;
pub use frame_loop::{run, LoopReport};
pub use scene::Scene;
pub use state::LoopState;
