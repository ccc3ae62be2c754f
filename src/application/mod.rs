//! Application layer - use cases and services

pub mod services;
pub mod shell;

pub use services::PoolService;
pub use shell::{Shell, ShellCommand};
