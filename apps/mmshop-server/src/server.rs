//! # HTTP Server
//!
//! Binds the listener and runs the router until ctrl-c or SIGTERM.
//!
//! ```text
//! ServerConfig ──► TcpListener::bind(host:port) ──► axum::serve(router)
//!                                                      │
//!                                    shutdown_signal ──┘ graceful stop
//! ```

use std::future::Future;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api::{create_router, SharedState};
use crate::config::ServerConfig;
use crate::error::ServerError;

/// Binds `config.bind_address()` and serves until a shutdown signal arrives.
pub async fn serve(config: &ServerConfig, state: SharedState) -> Result<(), ServerError> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(%addr, base_url = %config.base_url(), "Server listening");
    serve_on(listener, state, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` completes.
pub async fn serve_on<F>(
    listener: TcpListener,
    state: SharedState,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
