//! Configuration management: defaults, validation, loading from environment + CLI flags.

pub mod app_config;
pub mod defaults;
pub mod validation;

pub use app_config::AppConfig;
