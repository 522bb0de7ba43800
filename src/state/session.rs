//! Per-connection session state.
//!
//! ```text
//! Unregistered ──PASS/NICK/USER──▶ Registering ──password+nick+user──▶ Registered
//!       │                              │                                   │
//!       └──────────────── QUIT / KILL / EOF ───────────────────────────────┴──▶ Closing
//! ```

use std::collections::HashSet;
use std::net::SocketAddr;

use chrono::{DateTime, Utc};
use ircserv_proto::{Message, Prefix};
use tokio::sync::mpsc;
use tracing::debug;

use super::uid::ConnId;

/// Fixed host shown in every user mask; no reverse DNS is performed.
pub const USER_HOST: &str = "localhost";

/// Registration progress of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Unregistered,
    Registering,
    Registered,
    Closing,
}

/// User modes.
#[derive(Debug, Default, Clone)]
pub struct UserModes {
    pub invisible: bool, // +i
    pub oper: bool,      // +o (IRC operator)
}

impl UserModes {
    /// Convert modes to a string like "+io".
    pub fn as_mode_string(&self) -> String {
        let mut s = String::from("+");
        if self.invisible {
            s.push('i');
        }
        if self.oper {
            s.push('o');
        }
        s
    }
}

/// Server-side state for one client connection.
#[derive(Debug)]
pub struct Session {
    pub id: ConnId,
    pub addr: SocketAddr,
    pub nick: Option<String>,
    pub user: Option<String>,
    pub realname: Option<String>,
    /// PASS matched the server password.
    pub password_ok: bool,
    pub phase: SessionPhase,
    /// The 001-004 burst has been sent.
    pub welcomed: bool,
    pub modes: UserModes,
    pub away: Option<String>,
    /// Lower-cased names of joined channels.
    pub channels: HashSet<String>,
    pub connected_at: DateTime<Utc>,
    /// Updated by PONG only.
    pub last_activity: DateTime<Utc>,
    outbound: Option<mpsc::Sender<Message>>,
}

impl Session {
    pub fn new(id: ConnId, addr: SocketAddr, outbound: mpsc::Sender<Message>) -> Self {
        let now = Utc::now();
        Self {
            id,
            addr,
            nick: None,
            user: None,
            realname: None,
            password_ok: false,
            phase: SessionPhase::Unregistered,
            welcomed: false,
            modes: UserModes::default(),
            away: None,
            channels: HashSet::new(),
            connected_at: now,
            last_activity: now,
            outbound: Some(outbound),
        }
    }

    /// The nickname, or `*` before one is assigned.
    pub fn nick_or_star(&self) -> &str {
        self.nick.as_deref().unwrap_or("*")
    }

    pub fn username(&self) -> &str {
        self.user.as_deref().unwrap_or("*")
    }

    pub fn is_registered(&self) -> bool {
        self.phase == SessionPhase::Registered
    }

    pub fn is_oper(&self) -> bool {
        self.modes.oper
    }

    /// `nick!user@localhost`
    pub fn prefix(&self) -> Prefix {
        Prefix::new(self.nick_or_star(), self.username(), USER_HOST)
    }

    /// Move out of `Unregistered` on the first PASS/NICK/USER.
    pub fn touch_registration(&mut self) {
        if self.phase == SessionPhase::Unregistered {
            self.phase = SessionPhase::Registering;
        }
    }

    /// Whether the registration predicate holds.
    pub fn can_register(&self, password_required: bool) -> bool {
        (!password_required || self.password_ok)
            && self.nick.is_some()
            && self.user.is_some()
            && self.realname.is_some()
    }

    /// Queue a frame for this connection. A full queue drops the frame.
    pub fn send(&self, msg: Message) {
        let Some(outbound) = &self.outbound else {
            return;
        };
        if let Err(e) = outbound.try_send(msg) {
            debug!(conn = %self.id, error = %e, "Dropping outbound frame");
        }
    }

    /// Drop the outbound queue; the connection task flushes what is queued
    /// and closes the socket.
    pub fn close_link(&mut self) {
        self.phase = SessionPhase::Closing;
        self.outbound = None;
    }
}
