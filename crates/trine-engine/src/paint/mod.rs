//! Color values handed to the GPU layer.

mod color;

pub use color::Color;
