use std::fmt;

/// Failure while allocating vertex storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    CreateVertexArray(String),
    CreateBuffer(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateVertexArray(e) => write!(f, "failed to create vertex array: {e}"),
            Self::CreateBuffer(e) => write!(f, "failed to create vertex buffer: {e}"),
        }
    }
}

impl std::error::Error for GeometryError {}
