use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket, lookup_host};
use tracing::{info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::handler::Handler;

/// Pending-connection queue length; the same value tokio uses for
/// `TcpListener::bind`.
const BACKLOG: u32 = 1024;

/// Binds the listening socket with `SO_REUSEADDR`, so a restarted server
/// can take the address back right after the previous one exits.
pub async fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let listen_addr = cfg.listen_addr();
    let addr: SocketAddr = lookup_host(&listen_addr)
        .await
        .with_context(|| format!("resolving {listen_addr}"))?
        .next()
        .with_context(|| format!("no address found for {listen_addr}"))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket.bind(addr).with_context(|| format!("binding {addr}"))?;

    Ok(socket.listen(BACKLOG)?)
}

/// Serves connections one at a time, in the order they are accepted.
///
/// Each connection is read, answered and closed before the next accept.
/// Failures on a single connection are logged and never stop the loop.
pub async fn serve<H: Handler>(
    listener: TcpListener,
    handler: H,
    cfg: &Config,
) -> anyhow::Result<()> {
    info!("Listening on {}", listener.local_addr()?);

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, peer, cfg.max_request_bytes);
        if let Err(e) = conn.run(&handler).await {
            warn!("Connection error from {}: {}", peer, e);
        }
    }
}

pub async fn run<H: Handler>(cfg: &Config, handler: H) -> anyhow::Result<()> {
    let listener = bind(cfg).await?;
    serve(listener, handler, cfg).await
}
