//! Gateway - TCP listener that accepts incoming connections.
//!
//! The Gateway binds the listening socket and spawns a Connection task for
//! each incoming client. Tasks are tracked so shutdown can wait for them to
//! flush their final frames.

use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::sync::mpsc;
use tokio_util::task::TaskTracker;
use tracing::{Instrument, error, info, instrument};

use crate::config::LimitsConfig;
use crate::network::Connection;
use crate::state::{ConnIdGenerator, ServerEvent};
use crate::telemetry::spans;

/// The Gateway accepts incoming TCP connections and spawns handlers.
pub struct Gateway {
    listener: TcpListener,
    events: mpsc::Sender<ServerEvent>,
    limits: LimitsConfig,
    ids: ConnIdGenerator,
    tracker: TaskTracker,
}

impl Gateway {
    /// Bind the gateway to the specified address.
    pub async fn bind(
        addr: impl ToSocketAddrs,
        events: mpsc::Sender<ServerEvent>,
        limits: LimitsConfig,
        tracker: TaskTracker,
    ) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!(addr = %listener.local_addr()?, "Listener bound");

        Ok(Self {
            listener,
            events,
            limits,
            ids: ConnIdGenerator::new(),
            tracker,
        })
    }

    /// Run the gateway, accepting connections until the task is dropped.
    #[instrument(skip(self), name = "gateway")]
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        error!(%addr, error = %e, "Failed to set TCP_NODELAY");
                    }

                    let id = self.ids.next();
                    info!(conn = %id, %addr, "Connection accepted");

                    let connection =
                        Connection::new(id, stream, addr, self.events.clone(), &self.limits);
                    self.tracker
                        .spawn(connection.run().instrument(spans::connection(id, addr.ip())));
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }
}
