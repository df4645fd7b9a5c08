//! Small utilities shared across the workspace: environment-variable
//! access and TOML configuration loading.

pub mod config;
pub mod env;
