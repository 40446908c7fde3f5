use std::future::Future;

use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use service::seed::seed_countries;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over an already migrated store.
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState::new(db), build_cors())
}

/// Connect, migrate and seed according to `cfg`.
pub async fn prepare_store(cfg: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    common::env::ensure_sqlite_dir(&cfg.database.url).await?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    // 迁移与种子数据都在开始监听之前完成
    if cfg.database.run_migrations {
        models::db::migrate(&db).await?;
        info!(event = "migrations_applied", "schema is up to date");
    }

    if let Some(path) = cfg.seed.countries_file.as_deref() {
        seed_countries(&db, path).await?;
    }
    Ok(db)
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let db = prepare_store(&cfg).await?;
    let app = build_app(db);

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, event = "listening", "countries api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_until(cfg, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for ctrl_c; serving without signal handling");
            std::future::pending::<()>().await;
        }
    })
    .await
}
