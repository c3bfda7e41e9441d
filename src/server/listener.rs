use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::proxy::{BackendRegistry, forwarder};

/// Bind the public address and run the accept loop until it fails.
///
/// Bind and accept errors are both fatal here; the caller decides what a
/// dead listener means for the process (main exits non-zero).
pub async fn run(listen_addr: &str, registry: BackendRegistry) -> anyhow::Result<()> {
    let listener = TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("cannot listen on {listen_addr}"))?;
    info!("proxying on {}", listen_addr);

    serve(listener, registry).await
}

/// Accept loop over an already-bound listener.
///
/// Each accepted connection gets one backend picked from the registry
/// and one spawned forwarder task that is never awaited. There is no cap
/// on concurrent connections; every accepted socket costs a task pair
/// until its relay ends.
pub async fn serve(listener: TcpListener, registry: BackendRegistry) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await.context("accept failed")?;

        let backend = match registry.next().await {
            Ok(backend) => backend,
            Err(e) => {
                // Dropping the socket closes it; keep accepting.
                warn!(peer = %peer, "{}, dropping connection", e);
                continue;
            }
        };

        info!(peer = %peer, backend = %backend, "accepted connection");
        tokio::spawn(async move {
            forwarder::forward(socket, &backend).await;
        });
    }
}
