//! Startup, run and teardown sequencing.
//!
//! This is the stable entry point for binaries: open a session from a
//! [`Backend`], draw until closed, release everything, and report an exit
//! status.

mod app;
mod config;

pub use app::{
    exit_code_for, run, Backend, GlutinBackend, Session, EXIT_OK, EXIT_RUNTIME_FAILURE,
    EXIT_STARTUP_FAILURE,
};
pub use config::AppConfig;
