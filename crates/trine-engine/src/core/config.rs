use crate::device::ContextConfig;
use crate::render::RenderConfig;

/// Complete startup configuration. There is no file or CLI layer; callers
/// start from `Default` and override fields in code.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub context: ContextConfig,
    pub render: RenderConfig,
}
