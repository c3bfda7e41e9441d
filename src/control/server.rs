use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::control::connection::Connection;
use crate::proxy::BackendRegistry;

/// Bind the control address and serve requests until the listener fails.
///
/// Like the public listener, bind and accept errors are fatal and bubble
/// up to main.
pub async fn run(control_addr: &str, registry: BackendRegistry) -> anyhow::Result<()> {
    let listener = TcpListener::bind(control_addr)
        .await
        .with_context(|| format!("cannot listen on control address {control_addr}"))?;
    info!("control interface on {}", control_addr);

    serve(listener, registry).await
}

/// Accept loop over an already-bound control listener; one task per
/// control connection.
pub async fn serve(listener: TcpListener, registry: BackendRegistry) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await.context("control accept failed")?;

        let registry = registry.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, registry);
            if let Err(e) = conn.run().await {
                error!("control connection error from {}: {}", peer, e);
            }
        });
    }
}
