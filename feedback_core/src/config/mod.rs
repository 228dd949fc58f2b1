//! Application configuration

pub mod settings;

pub use settings::{AppConfig, CorsConfig, ServerConfig, StorageConfig};
