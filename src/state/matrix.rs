//! The Matrix: central server state.
//!
//! Owned by the server actor and lent to handlers as `&mut`, so no field is
//! ever shared between tasks.

use std::collections::{BTreeSet, HashMap};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use ircserv_proto::{Command, Message, Prefix, irc_eq, irc_to_lower};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::Config;

use super::channel::Channel;
use super::lifecycle::LifecycleManager;
use super::session::{Session, USER_HOST};
use super::uid::ConnId;

/// Server identity.
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub description: String,
    pub version: &'static str,
    pub created: DateTime<Utc>,
    started: Instant,
}

impl ServerInfo {
    pub fn new(name: String, description: String) -> Self {
        Self {
            name,
            description,
            version: env!("CARGO_PKG_VERSION"),
            created: Utc::now(),
            started: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }
}

/// How a session is leaving.
#[derive(Debug, Clone)]
pub enum Departure {
    /// The client sent QUIT.
    Quit(String),
    /// EOF or I/O error.
    Lost(String),
    /// The server dropped the link over malformed input.
    Rejected(String),
    /// An IRC operator issued KILL.
    Killed {
        killer: ConnId,
        killer_prefix: Prefix,
        reason: String,
    },
}

/// Central server state: sessions and channels.
pub struct Matrix {
    pub server_info: ServerInfo,
    pub config: Config,
    /// File re-read by REHASH.
    pub config_path: PathBuf,
    /// `None` when clients need not send PASS.
    pub password: Option<String>,
    pub sessions: HashMap<ConnId, Session>,
    /// Keyed by case-folded name.
    pub channels: HashMap<String, Channel>,
    pub lifecycle: LifecycleManager,
    /// Dispatch counts per command, for STATS m.
    pub command_counts: HashMap<&'static str, u64>,
}

impl Matrix {
    pub fn new(config: Config, password: Option<String>, config_path: PathBuf) -> Self {
        Self {
            server_info: ServerInfo::new(
                config.server.name.clone(),
                config.server.description.clone(),
            ),
            config,
            config_path,
            password,
            sessions: HashMap::new(),
            channels: HashMap::new(),
            lifecycle: LifecycleManager::new(),
            command_counts: HashMap::new(),
        }
    }

    pub fn add_session(&mut self, id: ConnId, addr: SocketAddr, outbound: mpsc::Sender<Message>) {
        self.sessions.insert(id, Session::new(id, addr, outbound));
        debug!(conn = %id, %addr, sessions = self.sessions.len(), "Session created");
    }

    pub fn session(&self, id: ConnId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    pub fn session_mut(&mut self, id: ConnId) -> Option<&mut Session> {
        self.sessions.get_mut(&id)
    }

    /// Resolve a nickname, case-insensitively.
    pub fn find_nick(&self, nick: &str) -> Option<ConnId> {
        self.sessions
            .values()
            .find(|s| s.nick.as_deref().is_some_and(|n| irc_eq(n, nick)))
            .map(|s| s.id)
    }

    /// Exact, case-sensitive nickname lookup used for message targets.
    pub fn find_nick_exact(&self, nick: &str) -> Option<ConnId> {
        self.sessions
            .values()
            .find(|s| s.nick.as_deref() == Some(nick))
            .map(|s| s.id)
    }

    /// Whether `candidate` is free for `excluding` to take. A session may
    /// always re-case its own nickname.
    pub fn nick_available(&self, candidate: &str, excluding: ConnId) -> bool {
        self.find_nick(candidate).is_none_or(|owner| owner == excluding)
    }

    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels.get(&irc_to_lower(name))
    }

    pub fn channel_mut(&mut self, name: &str) -> Option<&mut Channel> {
        self.channels.get_mut(&irc_to_lower(name))
    }

    /// Queue a frame for one connection. Unknown ids are ignored.
    pub fn send_to(&self, id: ConnId, msg: Message) {
        if let Some(session) = self.sessions.get(&id) {
            session.send(msg);
        }
    }

    /// Send to every member of a channel, optionally skipping one.
    pub fn broadcast_to_channel(&self, name: &str, msg: &Message, exclude: Option<ConnId>) {
        let Some(channel) = self.channel(name) else {
            return;
        };
        for member in channel.member_ids() {
            if Some(member) != exclude {
                self.send_to(member, msg.clone());
            }
        }
    }

    /// Every other session sharing at least one channel with `id`, each
    /// listed once.
    pub fn peers_of(&self, id: ConnId) -> BTreeSet<ConnId> {
        let Some(session) = self.sessions.get(&id) else {
            return BTreeSet::new();
        };
        session
            .channels
            .iter()
            .filter_map(|key| self.channels.get(key))
            .flat_map(Channel::member_ids)
            .filter(|member| *member != id)
            .collect()
    }

    /// Add `id` to a channel, creating it with `id` as operator if absent.
    /// Eligibility is the caller's concern. Returns whether the channel
    /// was created.
    pub fn join_channel(&mut self, id: ConnId, name: &str) -> bool {
        let key = irc_to_lower(name);
        let created = match self.channels.get_mut(&key) {
            Some(channel) => {
                channel.add_member(id);
                false
            }
            None => {
                self.channels.insert(key.clone(), Channel::new(name, id));
                true
            }
        };
        if let Some(session) = self.sessions.get_mut(&id) {
            session.channels.insert(key);
        }
        created
    }

    /// Remove `id` from a channel and destroy the channel once empty.
    /// Returns whether `id` was a member.
    pub fn part_channel(&mut self, id: ConnId, name: &str) -> bool {
        let key = irc_to_lower(name);
        if let Some(session) = self.sessions.get_mut(&id) {
            session.channels.remove(&key);
        }
        let Some(channel) = self.channels.get_mut(&key) else {
            return false;
        };
        let was_member = channel.remove_member(id);
        if channel.is_empty() {
            debug!(channel = %channel.name, "Channel removed (empty)");
            self.channels.remove(&key);
        }
        was_member
    }

    /// Tear a session down.
    ///
    /// Order: departure notice to peers, channel removal, final ERROR (for
    /// QUIT and KILL), link close, session erase. Unknown ids are ignored.
    pub fn disconnect(&mut self, id: ConnId, departure: Departure) {
        let Some(session) = self.sessions.get(&id) else {
            return;
        };
        let nick = session.nick_or_star().to_string();
        let prefix = session.prefix();
        let peers = self.peers_of(id);

        let error_text = match &departure {
            Departure::Quit(reason) | Departure::Lost(reason) | Departure::Rejected(reason) => {
                let quit = Message::quit_with_message(reason.clone()).with_prefix(prefix);
                for peer in &peers {
                    self.send_to(*peer, quit.clone());
                }
                (!matches!(departure, Departure::Lost(_)))
                    .then(|| format!("Closing Link: {USER_HOST} ({reason})"))
            }
            Departure::Killed {
                killer,
                killer_prefix,
                reason,
            } => {
                let kill = Message::from(Command::KILL(nick.clone(), reason.clone()))
                    .with_prefix(killer_prefix.clone());
                for peer in peers.iter().filter(|p| *p != killer) {
                    self.send_to(*peer, kill.clone());
                }
                let killer_nick = killer_prefix.nick().unwrap_or("*");
                Some(format!(
                    "Closing Link: {USER_HOST} (Killed ({killer_nick} ({reason})))"
                ))
            }
        };

        let joined: Vec<String> = session.channels.iter().cloned().collect();
        for key in joined {
            self.part_channel(id, &key);
        }

        if let Some(mut session) = self.sessions.remove(&id) {
            if let Some(text) = error_text {
                session.send(Message::error(text));
            }
            session.close_link();
        }

        info!(conn = %id, nick = %nick, reason = ?departure, "Session closed");
    }

    /// Send `ERROR :<text>` to everyone, close every link and drop all
    /// state. The actor stops after the current event.
    pub fn shutdown(&mut self, text: &str) {
        info!(sessions = self.sessions.len(), reason = %text, "Closing all sessions");
        for (_, mut session) in self.sessions.drain() {
            session.send(Message::error(text));
            session.close_link();
        }
        self.channels.clear();
        self.lifecycle.request_stop();
    }
}
