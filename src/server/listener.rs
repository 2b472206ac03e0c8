use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::docroot::DocumentRoot;
use crate::server::handler::StaticFiles;

/// Pending connections the OS may queue while one is being served.
const BACKLOG: u32 = 1;

/// Pause after a failed accept so a persistent error (e.g. EMFILE) does not spin.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

pub struct Server {
    listener: TcpListener,
    files: StaticFiles,
    requests: u64,
}

impl Server {
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let addr: SocketAddr = cfg
            .listen_addr()
            .parse()
            .with_context(|| format!("invalid listen address {}", cfg.listen_addr()))?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket
            .bind(addr)
            .with_context(|| format!("failed to bind {}", addr))?;
        let listener = socket.listen(BACKLOG)?;

        info!(
            "Listening on {}, serving {}",
            listener.local_addr()?,
            cfg.document_root.display()
        );

        Ok(Self {
            listener,
            files: StaticFiles::new(DocumentRoot::new(cfg.document_root.clone())),
            requests: 0,
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Connections accepted so far.
    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Accepts and serves connections one after another, forever.
    ///
    /// Each connection is finished and closed before the next accept.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Accept failed: {}", e);
                    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                    continue;
                }
            };

            self.requests += 1;
            info!(request = self.requests, "Accepted connection from {}", peer);

            let mut conn = Connection::new(socket, &self.files);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {:#}", peer, e);
            }
        }
    }
}
