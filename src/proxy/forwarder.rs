//! Per-connection byte relay
//!
//! Binds one accepted inbound socket to one backend socket and shuttles
//! opaque bytes both ways. Nothing is buffered, inspected or rewritten.

use tokio::io::copy_bidirectional;
use tokio::net::TcpStream;
use tracing::{debug, warn};

/// Relay `inbound` to and from `backend` until both directions finish.
///
/// Connection setup is single-shot: a dial failure closes the inbound
/// socket with no retry and no alternate backend. Once the relay ends or
/// errors, both directions are torn down together, so a dead peer cannot
/// leave the other half of the pair lingering. EOF on one side still
/// propagates as a write shutdown to the other, so protocol-level
/// half-close keeps working.
pub async fn forward(mut inbound: TcpStream, backend: &str) {
    let mut outbound = match TcpStream::connect(backend).await {
        Ok(stream) => stream,
        Err(e) => {
            warn!(backend = %backend, error = %e, "backend dial failed, dropping connection");
            return;
        }
    };

    match copy_bidirectional(&mut inbound, &mut outbound).await {
        Ok((to_backend, to_client)) => {
            debug!(backend = %backend, to_backend, to_client, "relay finished");
        }
        Err(e) => {
            debug!(backend = %backend, error = %e, "relay ended with error");
        }
    }
}
