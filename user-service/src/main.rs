mod config;
mod error;
mod handlers;
mod logging;
mod middleware;
mod routes;
mod server;
mod service;

#[cfg(test)]
mod tests;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    logging::init_logging(&config);
    tracing::info!(
        environment = config.environment.as_str(),
        port = config.port,
        "Starting application"
    );

    let app = routes::create_router(&config);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    server::serve(listener, app, server::shutdown_signal(), config.shutdown_timeout).await?;

    tracing::info!("Service finished");
    Ok(())
}
