use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nexevent_backend::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port: u16 = match std::env::var("NEXEVENT_PORT") {
        Ok(value) => value
            .parse()
            .context("NEXEVENT_PORT must be a valid port number")?,
        Err(_) => 5000,
    };

    let addr = format!("127.0.0.1:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("unable to bind {addr}"))?;

    info!("NexEvent backend listening on {addr}");
    axum::serve(listener, server::router())
        .await
        .context("server error")?;

    Ok(())
}
