use anyhow::Context;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, warn};

use crate::http::parser::{parse_http_request, ParseError};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::server::handler::StaticFiles;

/// Bytes taken from the socket per connection. A request whose headers run
/// past this is parsed from the truncated prefix.
pub const REQUEST_BUFFER_SIZE: usize = 1024;

pub struct Connection<'a> {
    stream: TcpStream,
    files: &'a StaticFiles,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<'a> Connection<'a> {
    pub fn new(stream: TcpStream, files: &'a StaticFiles) -> Self {
        Self {
            stream,
            files,
            state: ConnectionState::Reading,
        }
    }

    /// Serves a single request and closes the connection.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(Ok(req)) => ConnectionState::Processing(req),
                        Some(Err(e)) => {
                            warn!(error = %e, "Rejecting malformed request");
                            ConnectionState::Writing(ResponseWriter::new(&Response::bad_request()))
                        }
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(req) => {
                    log_request(req);
                    let response = self.files.respond(req).await;
                    debug!(status = response.status.as_u16(), "Responding");

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("failed to write response")?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        // The peer may already be gone; nothing left to report to it.
        let _ = self.stream.shutdown().await;
        Ok(())
    }

    /// Reads once. `None` means the client closed without sending anything.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Result<Request, ParseError>>> {
        let mut buf = [0u8; REQUEST_BUFFER_SIZE];
        let n = self
            .stream
            .read(&mut buf)
            .await
            .context("failed to read request")?;

        if n == 0 {
            return Ok(None);
        }

        Ok(Some(parse_http_request(&buf[..n])))
    }
}

fn log_request(req: &Request) {
    debug!(
        method = %req.method,
        target = %req.target,
        version = %req.version,
        "Request line"
    );
    debug!(headers = ?req.headers, "Headers");
    debug!(cookies = ?req.cookies, "Cookies");
    debug!(user_agent = req.user_agent().unwrap_or("-"), "User agent");
}
