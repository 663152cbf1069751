use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};
use service::{contacts::ContactService, runtime, storage::JsonFileStore};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire the file store, the contact service and the router for `cfg`.
pub fn build_app(cfg: &AppConfig) -> Router {
    let store = Arc::new(JsonFileStore::new(cfg.storage.data_file.clone()));
    let state = AppState {
        contacts: Arc::new(ContactService::new(store)),
        upload_limit: cfg.upload.max_bytes,
    };
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and run the HTTP server until Ctrl-C.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    runtime::ensure_data_dir(&cfg.storage.data_file).await?;

    let app = build_app(&cfg);

    let bind = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .map_err(|source| StartupError::Bind { addr: bind.clone(), source })?;
    let addr: SocketAddr = listener
        .local_addr()
        .map_err(|e| StartupError::InvalidConfig(format!("{bind}: {e}")))?;
    info!(%addr, data_file = %cfg.storage.data_file.display(), "starting contact server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    Ok(())
}
