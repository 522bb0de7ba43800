//! Connection - Handles an individual client connection.
//!
//! Each Connection runs in its own Tokio task:
//!
//! ```text
//!   socket ──LineCodec──▶ ServerEvent::Line ──▶ server actor
//!   socket ◀─LineCodec─── outbound queue    ◀── server actor
//! ```
//!
//! The task never touches server state. The actor closes the link by
//! dropping the outbound sender; frames queued before that are still
//! written.

use std::net::SocketAddr;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use ircserv_proto::{LineCodec, Message, ProtocolError};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_util::codec::Framed;
use tracing::{debug, info, warn};

use crate::config::LimitsConfig;
use crate::state::{ConnId, ServerEvent};

/// Why the read/write loop ended.
enum Exit {
    /// The server dropped the outbound queue.
    ClosedByServer,
    /// The peer went away or the socket failed.
    Lost(String),
    /// The peer sent input the codec refused; the actor has been told.
    Rejected,
    /// The server actor is gone.
    ServerGone,
}

/// Upper bound on flushing the final frames of a rejected connection.
const REJECT_FLUSH: Duration = Duration::from_secs(5);
/// How long unread input is discarded after the write side is shut, so the
/// final frames are not lost to a reset.
const REJECT_LINGER: Duration = Duration::from_secs(1);

/// QUIT/ERROR reason for input the codec refused.
fn rejection_reason(e: &ProtocolError) -> String {
    match e {
        ProtocolError::MessageTooLong { .. } => "Input line too long".to_string(),
        other => other.to_string(),
    }
}

/// A client connection handler.
pub struct Connection {
    id: ConnId,
    addr: SocketAddr,
    stream: TcpStream,
    events: mpsc::Sender<ServerEvent>,
    max_line_length: usize,
    outbound_queue: usize,
}

impl Connection {
    pub fn new(
        id: ConnId,
        stream: TcpStream,
        addr: SocketAddr,
        events: mpsc::Sender<ServerEvent>,
        limits: &LimitsConfig,
    ) -> Self {
        Self {
            id,
            addr,
            stream,
            events,
            max_line_length: limits.max_line_length,
            outbound_queue: limits.outbound_queue.max(1),
        }
    }

    /// Run the connection until either side closes it.
    pub async fn run(self) {
        let Self {
            id,
            addr,
            stream,
            events,
            max_line_length,
            outbound_queue,
        } = self;

        let (outbound, mut outgoing) = mpsc::channel::<Message>(outbound_queue);
        let connected = ServerEvent::Connected { id, addr, outbound };
        if events.send(connected).await.is_err() {
            debug!("Server actor gone, dropping connection");
            return;
        }
        info!("Client connected");

        let framed = Framed::new(stream, LineCodec::with_max_len(max_line_length));
        let (mut sink, mut lines) = framed.split();

        let exit = loop {
            tokio::select! {
                biased;

                out = outgoing.recv() => match out {
                    Some(msg) => {
                        if let Err(e) = sink.send(msg).await {
                            break Exit::Lost(e.to_string());
                        }
                    }
                    None => {
                        if let Err(e) = sink.close().await {
                            debug!(error = %e, "Error closing socket");
                        }
                        break Exit::ClosedByServer;
                    }
                },

                incoming = lines.next() => match incoming {
                    Some(Ok(line)) => {
                        if events.send(ServerEvent::Line { id, line }).await.is_err() {
                            break Exit::ServerGone;
                        }
                    }
                    Some(Err(ProtocolError::Io(e))) => {
                        warn!(error = %e, "Read error");
                        break Exit::Lost(e.to_string());
                    }
                    Some(Err(e)) => {
                        warn!(error = %e, "Rejecting malformed input");
                        let reason = rejection_reason(&e);
                        if events.send(ServerEvent::Rejected { id, reason }).await.is_err() {
                            break Exit::ServerGone;
                        }
                        break Exit::Rejected;
                    }
                    None => break Exit::Lost("Connection closed".to_string()),
                },
            }
        };

        match exit {
            Exit::ClosedByServer => info!("Connection closed by server"),
            Exit::ServerGone => debug!("Server actor gone"),
            Exit::Rejected => {
                // Replies to earlier lines and the ERROR frame are still
                // queued; the actor drops the sender after the ERROR.
                let flush = async {
                    while let Some(msg) = outgoing.recv().await {
                        sink.send(msg).await?;
                    }
                    sink.close().await
                };
                let flushed = tokio::time::timeout(REJECT_FLUSH, flush).await;
                match flushed {
                    Ok(Ok(())) => {
                        if let Ok(framed) = lines.reunite(sink) {
                            linger(framed.into_inner()).await;
                        }
                    }
                    Ok(Err(e)) => debug!(error = %e, "Error flushing rejected connection"),
                    Err(_) => debug!("Timed out flushing rejected connection"),
                }
                info!("Connection closed by server");
            }
            Exit::Lost(reason) => {
                info!(%reason, "Client disconnected");
                // The actor may already be stopping; nothing left to notify then.
                let _ = events.send(ServerEvent::Disconnected { id, reason }).await;
            }
        }
    }
}

/// Discard whatever the peer is still sending until it closes or
/// [`REJECT_LINGER`] passes.
async fn linger(mut stream: TcpStream) {
    let mut buf = [0u8; 1024];
    let discard = async {
        while let Ok(n) = stream.read(&mut buf).await {
            if n == 0 {
                break;
            }
        }
    };
    let _ = tokio::time::timeout(REJECT_LINGER, discard).await;
}
