//! Shutdown signal for `axum::serve(..).with_graceful_shutdown(..)`.

use std::future::Future;
use std::io;
use tracing::{error, info};

/// Completes on Ctrl+C or (on unix) SIGTERM.
pub async fn signal() {
    let ctrl_c = until_signal("Ctrl+C", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
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
    info!("shutdown signal received");
}

/// Waits for a signal listener. A listener that cannot be registered never completes, so the
/// server keeps running instead of shutting down right after startup.
pub async fn until_signal<F>(name: &str, listener: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = listener.await {
        error!(signal = name, error = %e, "failed to listen for signal");
        std::future::pending::<()>().await;
    }
}
