//! Main entry point for the pipeline admin backend.
//!
//! This file boots the Axum web server: logging is initialized, the
//! configuration is loaded from the environment, the database pool is
//! opened, and all API routes and middleware are registered.

use pipeline_admin::start_server;

#[tokio::main]
async fn main() {
    start_server().await;
}
