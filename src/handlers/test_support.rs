//! In-memory fixtures for handler tests: a matrix plus mpsc receivers in
//! place of sockets.

use std::path::PathBuf;

use ircserv_proto::Message;
use tokio::sync::mpsc;

use super::core::{Context, Registry};
use crate::config::Config;
use crate::state::{ConnId, Matrix, SessionPhase};

pub fn matrix() -> Matrix {
    Matrix::new(Config::default(), None, PathBuf::from("server.conf"))
}

pub fn matrix_with_password(password: &str) -> Matrix {
    Matrix::new(
        Config::default(),
        Some(password.to_string()),
        PathBuf::from("server.conf"),
    )
}

/// A fresh, unregistered connection.
pub fn connect(m: &mut Matrix, n: u64) -> (ConnId, mpsc::Receiver<Message>) {
    let id = ConnId::new(n);
    let (tx, rx) = mpsc::channel(256);
    let addr = format!("127.0.0.1:{}", 40000 + n)
        .parse()
        .expect("valid socket address");
    m.add_session(id, addr, tx);
    (id, rx)
}

/// A connection that has completed registration as `nick`, with the
/// username set to the lower-cased nickname.
pub fn register(m: &mut Matrix, n: u64, nick: &str) -> (ConnId, mpsc::Receiver<Message>) {
    let (id, rx) = connect(m, n);
    let session = m.session_mut(id).expect("session just added");
    session.nick = Some(nick.to_string());
    session.user = Some(nick.to_lowercase());
    session.realname = Some(format!("{nick} Real"));
    session.password_ok = true;
    session.phase = SessionPhase::Registered;
    session.welcomed = true;
    (id, rx)
}

/// Dispatch one line as if it arrived from `id`.
pub fn line(m: &mut Matrix, id: ConnId, text: &str) {
    let registry = Registry::new();
    let mut ctx = Context::new(id, m);
    registry.dispatch_line(&mut ctx, text);
}

/// Everything queued for a connection so far, without line terminators.
pub fn drain(rx: &mut mpsc::Receiver<Message>) -> Vec<String> {
    let mut out = Vec::new();
    while let Ok(msg) = rx.try_recv() {
        out.push(msg.to_string().trim_end_matches("\r\n").to_string());
    }
    out
}

/// Whether the connection's outbound queue has been dropped.
pub fn is_closed(rx: &mut mpsc::Receiver<Message>) -> bool {
    matches!(
        rx.try_recv(),
        Err(mpsc::error::TryRecvError::Disconnected)
    )
}
