use std::future::Future;
use std::time::Duration;

use anyhow::{anyhow, Context};
use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};

/// Serves `app` until `shutdown` resolves, then drains in-flight requests.
///
/// Draining is bounded by `grace`; past that the server task is aborted and
/// an error is returned so the process exits non-zero.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    grace: Duration,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (drain_tx, drain_rx) = oneshot::channel::<()>();

    let mut server = tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = drain_rx.await;
            })
            .await
    });

    tokio::select! {
        () = shutdown => {}
        joined = &mut server => {
            // The server stopped on its own, before any signal
            return joined.context("Server task failed")?.context("Server error");
        }
    }

    tracing::info!("Shutting down server...");
    let _ = drain_tx.send(());

    match tokio::time::timeout(grace, &mut server).await {
        Ok(joined) => {
            joined
                .context("Server task failed")?
                .context("Server error")?;
            tracing::info!("Server stopped gracefully");
            Ok(())
        }
        Err(_) => {
            server.abort();
            tracing::error!(grace_ms = grace.as_millis() as u64, "Server forced to shutdown");
            Err(anyhow!("graceful shutdown exceeded {:?}", grace))
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
