use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::control::handlers;
use crate::control::parser::{ParseError, parse_request};
use crate::control::request::Request;
use crate::control::writer::ResponseWriter;
use crate::proxy::BackendRegistry;

/// One control-plane connection.
///
/// Reads a request, applies it to the registry, writes the response,
/// then either loops for the next request (keep-alive) or closes.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    registry: BackendRegistry,
    state: ConnectionState,
}

enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, registry: BackendRegistry) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            registry,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await? {
                    Some(req) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    None => {
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Processing(req) => {
                    let keep_alive = req.keep_alive();
                    let response = handlers::dispatch(&self.registry, req).await;

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if *keep_alive {
                        self.state = ConnectionState::Reading;
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever is already buffered; pipelined
            // requests are consumed one at a time.
            match parse_request(&self.buffer) {
                Ok((request, consumed)) => {
                    let _ = self.buffer.split_to(consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data.
                }

                Err(e) => {
                    return Err(anyhow::anyhow!("request parse error: {:?}", e));
                }
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Caller closed the connection.
                return Ok(None);
            }
        }
    }
}
