//! todolist-server binary entry point.
//!
//! # Responsibility
//! - Load configuration, initialize logging, open the store once, serve.
//! - Exit nonzero when the store cannot be reached at startup.

use log::{error, info};
use todolist_core::db::open_db;
use todolist_core::{core_version, init_logging};
use todolist_server::config::ServerConfig;
use todolist_server::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    if let Err(err) = init_logging(&config.log_level, config.log_dir.as_deref()) {
        // Logging is best-effort at startup; a broken sink must not keep the
        // service down.
        eprintln!("failed to initialize logging: {err}");
    }

    // Startup store failure is fatal: the process refuses to serve without
    // a reachable collection.
    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=server_start module=server status=error error_code=store_unavailable error={err}"
            );
            return Err(err.into());
        }
    };

    let state = AppState::new(conn);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(
        "event=server_start module=server status=ok version={} port={}",
        core_version(),
        config.port
    );
    axum::serve(listener, router).await?;

    Ok(())
}
