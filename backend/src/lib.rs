//! Admin backend for a recruiting/contact pipeline.
//!
//! Authenticated staff list job applications and contact-form messages,
//! mark them read, bulk-delete them, filter them, and view aggregate
//! analytics over instrumentation events. Every operation is a direct
//! query against the relational store; the only derived logic lives in
//! [`services`].

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod services;

use axum::extract::FromRef;
use axum::routing::get;
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tokio::signal::{self, ctrl_c};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use auth::SessionService;
use config::Config;

/// Shared per-request context: the database pool and the session guard.
///
/// Both are explicitly passed dependencies rather than ambient singletons,
/// so tests can assemble a state around an in-memory database.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub sessions: SessionService,
}

impl FromRef<AppState> for SessionService {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

/// Assemble the full router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(api::health))
        .merge(auth::routes::router())
        .merge(api::applications::routes::router())
        .merge(api::messages::routes::router())
        .merge(api::analytics::routes::router())
        .layer(middleware::trace_layer())
        .layer(middleware::cors_layer())
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();

    info!("Opening database at {}", config.database_url);
    let db = database::connect(&config.database_url)
        .await
        .expect("Database misconfigured!");

    let sessions = SessionService::new(&config.session_secret, config.admin_emails.clone());
    let state = AppState { db, sessions };

    let app = build_router(state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind server address");
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server terminated abnormally");

    info!("Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
