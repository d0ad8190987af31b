//! Responsibility
//! - tokio runtime entry point
//! - delegate to app::run() (no logic here)

use anyhow::Result;

mod api;
mod app;
mod config;
mod middleware;
mod state;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
