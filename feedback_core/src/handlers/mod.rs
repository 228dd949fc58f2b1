//! HTTP request handlers

pub mod feedback;
pub mod health;
pub mod routes;

pub use routes::create_routes;
