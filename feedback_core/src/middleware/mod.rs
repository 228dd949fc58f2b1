//! HTTP middleware layers

pub mod cors;
pub mod logging;

pub use cors::{cors_layer, cors_layer_from_config};
pub use logging::logging_layer;
