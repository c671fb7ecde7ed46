use anyhow::Result;
use trine_engine::core::{self, AppConfig, GlutinBackend};
use trine_engine::logging::{init_logging, LoggingConfig};
use trine_engine::render::LoopReport;

fn main() {
    init_logging(LoggingConfig::default());

    let result = launch();
    if let Err(e) = &result {
        log::error!("{e:#}");
    }

    std::process::exit(core::exit_code_for(&result));
}

fn launch() -> Result<LoopReport> {
    let mut config = AppConfig::default();
    config.context.title = "Hello Triangle".to_string();

    core::run(&mut GlutinBackend, &config)
}
