use std::net::SocketAddr;

use axum::Router;
use common::{env::ensure_database_dir, utils::logging::init_logging_from_env};
use configs::AppConfig;
use dotenvy::dotenv;
use service::auth::AuthConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Connect, migrate, and assemble the router for a loaded configuration.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    ensure_database_dir(&cfg.database.url).await?;
    let db = models::db::connect_and_migrate(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    if cfg.auth.jwt_secret.is_none() {
        warn!("no JWT secret configured; logins will not issue session tokens");
    }
    let state = ServerState {
        db,
        auth: AuthConfig { jwt_secret: cfg.auth.jwt_secret.clone(), token_ttl_hours: cfg.auth.token_ttl_hours },
    };
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
