//! Responsibility
//! - public surface of the HTTP API (routes() re-export)

pub mod dto;
pub mod handlers;
mod routes;

pub use routes::routes;
