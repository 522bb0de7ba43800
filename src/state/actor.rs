//! The server actor.
//!
//! One task owns the [`Matrix`]. Connection tasks feed it [`ServerEvent`]s
//! over a bounded channel, so events are handled strictly one at a time
//! and every handler runs to completion before the next event.

use std::net::SocketAddr;

use ircserv_proto::Message;
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::matrix::{Departure, Matrix};
use super::uid::ConnId;
use crate::handlers::{Context, Registry};

/// Final frame text on a signal-initiated shutdown.
pub const SHUTDOWN_TEXT: &str = "Closing Link: localhost (Server shutting down)";

/// Events delivered to the server actor.
#[derive(Debug)]
pub enum ServerEvent {
    /// A client was accepted.
    Connected {
        id: ConnId,
        addr: SocketAddr,
        outbound: mpsc::Sender<Message>,
    },
    /// One complete inbound line.
    Line { id: ConnId, line: String },
    /// EOF or read error on the connection.
    Disconnected { id: ConnId, reason: String },
    /// The connection sent input the codec refused.
    Rejected { id: ConnId, reason: String },
    /// SIGINT/SIGQUIT.
    Shutdown,
}

/// Owns the matrix and the handler registry.
pub struct ServerActor {
    matrix: Matrix,
    registry: Registry,
}

impl ServerActor {
    pub fn new(matrix: Matrix, registry: Registry) -> Self {
        Self { matrix, registry }
    }

    /// Process events until the server stops or every sender is gone.
    pub async fn run(mut self, mut events: mpsc::Receiver<ServerEvent>) {
        while let Some(event) = events.recv().await {
            self.handle_event(event);
            if self.matrix.lifecycle.is_stopping() {
                break;
            }
        }
        self.matrix.lifecycle.notify_stopped();
        info!("Server actor stopped");
    }

    pub fn handle_event(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::Connected { id, addr, outbound } => {
                self.matrix.add_session(id, addr, outbound);
            }
            ServerEvent::Line { id, line } => {
                if self.matrix.session(id).is_none() {
                    debug!(conn = %id, "Line for closed session ignored");
                    return;
                }
                let mut ctx = Context::new(id, &mut self.matrix);
                self.registry.dispatch_line(&mut ctx, &line);
            }
            ServerEvent::Disconnected { id, reason } => {
                self.matrix.disconnect(id, Departure::Lost(reason));
            }
            ServerEvent::Rejected { id, reason } => {
                self.matrix.disconnect(id, Departure::Rejected(reason));
            }
            ServerEvent::Shutdown => {
                info!("Shutdown requested");
                self.matrix.shutdown(SHUTDOWN_TEXT);
            }
        }
    }

    #[cfg(test)]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
}
