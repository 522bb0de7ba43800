//! ircserv - a single-process IRC server (RFC 1459/2812 subset).
//!
//! `ircserv <port> <password>`; an empty password disables PASS checking.

mod config;
mod error;
mod handlers;
mod network;
mod state;
mod telemetry;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context as _;
use tokio::signal::unix::{SignalKind, signal};
use tokio::sync::mpsc;
use tokio_util::task::TaskTracker;
use tracing::{error, info, warn};

use crate::config::{Args, Config, USAGE};
use crate::handlers::Registry;
use crate::network::Gateway;
use crate::state::{Matrix, ServerActor, ServerEvent};

/// Capacity of the connection → actor event queue.
const EVENT_QUEUE: usize = 1024;

/// How long shutdown waits for connection tasks to flush.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("ircserv: {e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    telemetry::init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Fatal error");
            eprintln!("ircserv: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config_path = config::config_path();
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    let addr = format!("{}:{}", config.server.host, args.port);
    let limits = config.limits.clone();
    info!(
        server = %config.server.name,
        %addr,
        password = args.password.is_some(),
        "Starting ircserv"
    );

    let matrix = Matrix::new(config, args.password, config_path);
    let mut stopped = matrix.lifecycle.subscribe();

    let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE);
    let tracker = TaskTracker::new();
    let gateway = Gateway::bind(addr.as_str(), events_tx.clone(), limits, tracker.clone())
        .await
        .with_context(|| format!("failed to listen on {addr}"))?;

    let actor = tokio::spawn(ServerActor::new(matrix, Registry::new()).run(events_rx));

    tokio::spawn(async move {
        if let Err(e) = forward_signals(events_tx).await {
            error!(error = %e, "Signal handling unavailable");
        }
    });

    let result = tokio::select! {
        result = gateway.run() => result,
        _ = stopped.recv() => {
            info!("Server stopped, closing connections");
            Ok(())
        }
    };

    tracker.close();
    if tokio::time::timeout(SHUTDOWN_GRACE, tracker.wait()).await.is_err() {
        warn!(remaining = tracker.len(), "Connections did not close in time");
    }
    actor.abort();

    result
}

/// Turn SIGINT/SIGQUIT into a graceful shutdown request.
async fn forward_signals(events: mpsc::Sender<ServerEvent>) -> anyhow::Result<()> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut quit = signal(SignalKind::quit())?;

    tokio::select! {
        _ = interrupt.recv() => info!("SIGINT received"),
        _ = quit.recv() => info!("SIGQUIT received"),
    }

    events
        .send(ServerEvent::Shutdown)
        .await
        .context("server actor already stopped")
}
