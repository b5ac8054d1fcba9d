//! FILENAME: app/server/src/lib.rs
// PURPOSE: Main library entry point for the calculation service.
// CONTEXT: Startup builds a ServerConfig once and passes it to the router;
// there is no global route registration. Request handling shares only the
// immutable AppState.

use axum::routing::post;
use axum::Router;
use engine::Evaluator;
use std::future::Future;
use tokio::net::TcpListener;

pub mod api_types;
pub mod calculate;
pub mod config;
pub mod error;
pub mod logging;

pub use api_types::{CalculateRequest, CalculateResponse, ErrorResponse};
pub use calculate::ApiError;
pub use config::{ErrorPolicy, ServerConfig};
pub use engine::NumericMode;
pub use error::ServiceError;
pub use logging::{get_log_path, init_log_file, install_log_bridge, next_seq, write_log};

/// Per-router state. Cheap to clone; nothing in it is mutable.
#[derive(Debug, Clone)]
pub struct AppState {
    pub evaluator: Evaluator,
    pub error_policy: ErrorPolicy,
}

pub fn create_app_state(config: &ServerConfig) -> AppState {
    AppState {
        evaluator: Evaluator::new(config.numeric_mode),
        error_policy: config.error_policy,
    }
}

/// Builds the router for `config`. Only POST is routed; other methods get 405.
pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .route(&config.route, post(calculate::calculate))
        .with_state(create_app_state(config))
}

/// Serves on an already bound listener until the process ends.
pub async fn serve(listener: TcpListener, config: ServerConfig) -> Result<(), ServiceError> {
    serve_with_shutdown(listener, config, std::future::pending()).await
}

/// Serves until `signal` resolves, then drains in-flight requests.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    config: ServerConfig,
    signal: F,
) -> Result<(), ServiceError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = build_router(&config);
    log_info!(
        "SYS",
        "listening on {} route={} mode={} policy={:?}",
        listener.local_addr()?,
        config.route,
        config.numeric_mode,
        config.error_policy
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(signal)
        .await?;
    log_info!("SYS", "server stopped");
    Ok(())
}

/// Installs the log bridge and opens the log file, if one is configured.
/// A log file that cannot be opened degrades to console-only logging.
pub fn init_logging(config: &ServerConfig) -> Result<(), ServiceError> {
    install_log_bridge(config.level_filter()?).map_err(ServiceError::Logging)?;

    if let Some(path) = &config.log_file {
        match init_log_file(path) {
            Ok(path) => {
                eprintln!("[LOG_INIT] SUCCESS - Log file: {:?}", path);
            }
            Err(e) => {
                eprintln!("[LOG_INIT] FAILED: {}", e);
                eprintln!("[LOG_INIT] Continuing with console-only logging");
            }
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log_error!("SYS", "failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log_info!("SYS", "shutdown requested");
}

// ============================================================================
// SERVICE ENTRY
// ============================================================================

pub fn run() -> Result<(), ServiceError> {
    let config = ServerConfig::load()?;
    init_logging(&config)?;
    log_info!("SYS", "calculation service starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let listener = TcpListener::bind(config.addr).await?;
        serve_with_shutdown(listener, config, shutdown_signal()).await
    })
}
