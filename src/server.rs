//! HTTP server initialization and runtime setup.
//!
//! Handles database setup, service wiring, and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::{
    SqliteClickRepository, SqliteLinkRepository, SqliteUserRepository,
};
use crate::infrastructure::title::HttpTitleFetcher;
use crate::routes::app_router;
use crate::state::AppState;
use crate::{
    application::services::{AuthService, LinkService},
    domain::TitleFetcher,
    domain::repositories::{ClickRepository, LinkRepository, UserRepository},
};

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file when missing)
/// - Migrations
/// - Repositories and services
/// - Axum HTTP server with cookie sessions
///
/// # Errors
///
/// Returns an error if the database cannot be opened, migrations fail, the
/// listen address cannot be bound, or a server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let users: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
    let links: Arc<dyn LinkRepository> = Arc::new(SqliteLinkRepository::new(pool.clone()));
    let clicks: Arc<dyn ClickRepository> = Arc::new(SqliteClickRepository::new(pool.clone()));
    let titles: Arc<dyn TitleFetcher> = Arc::new(HttpTitleFetcher::new());

    let state = AppState {
        auth_service: Arc::new(AuthService::new(users)),
        link_service: Arc::new(LinkService::new(links, clicks, titles)),
        protect_links_listing: config.protect_links_route,
    };

    let app = app_router(state, &config);
    let app = NormalizePathLayer::trim_trailing_slash().layer(app);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves once a shutdown signal arrives.
///
/// Listens for SIGINT everywhere and additionally SIGTERM on unix, so the
/// server drains in-flight requests under both Ctrl+C and a supervisor stop.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received SIGINT, shutting down");
            }
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM, shutting down");
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = ctrl_c.await;
        tracing::info!("Received Ctrl+C, shutting down");
    }
}
