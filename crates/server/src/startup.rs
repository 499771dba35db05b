use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, AppState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_bind_addr(cfg: &configs::AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // Configuration is loaded once and handed down explicitly; nothing
    // below reads ambient globals.
    let cfg = configs::AppConfig::load_or_default()?;

    // File-backed sqlite stores need their directory before first connect
    common::env::ensure_data_dir(&cfg.database.url).await?;

    // DB connection, then one-shot schema/seed initialization
    let db = models::db::connect_with_config(&cfg.database).await?;
    service::bootstrap::init_store(&db, &cfg).await?;

    let state = AppState {
        db,
        environment: cfg.environment.as_str().to_string(),
    };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    // Bind and serve
    let addr = load_bind_addr(&cfg)?;
    info!(%addr, environment = cfg.environment.as_str(), "starting menu service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
