use std::fmt;

use crate::device::ShaderStage;

/// Failure while turning shader sources into a linked program.
///
/// Driver logs are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// The driver refused to allocate a shader object.
    CreateShader { stage: ShaderStage, reason: String },
    /// The stage failed to compile.
    Compile { stage: ShaderStage, log: String },
    /// The driver refused to allocate a program object.
    CreateProgram { reason: String },
    /// The stages compiled but did not link.
    Link { log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateShader { stage, reason } => {
                write!(f, "failed to create {} shader: {reason}", stage.name())
            }
            Self::Compile { stage, log } => {
                write!(f, "{} shader failed to compile: {}", stage.name(), log.trim_end())
            }
            Self::CreateProgram { reason } => write!(f, "failed to create program: {reason}"),
            Self::Link { log } => write!(f, "program failed to link: {}", log.trim_end()),
        }
    }
}

impl std::error::Error for ShaderError {}
