//! Handler context and the `Handler` trait.

use ircserv_proto::{Message, MessageRef, Prefix, Response};

use crate::error::{HandlerError, HandlerResult};
use crate::state::{ConnId, Matrix, Session};

/// A command handler.
///
/// Handlers run on the server actor and complete synchronously: they read
/// and mutate the matrix, queue outbound frames and return. An `Err` is
/// turned into exactly one numeric reply by the registry.
pub trait Handler: Send + Sync {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult;
}

/// Handler context: the requesting connection plus the server state.
pub struct Context<'a> {
    pub conn: ConnId,
    pub matrix: &'a mut Matrix,
}

impl<'a> Context<'a> {
    pub fn new(conn: ConnId, matrix: &'a mut Matrix) -> Self {
        Self { conn, matrix }
    }

    /// The requester's session. Missing only if the connection was torn
    /// down earlier in the same event.
    pub fn session(&self) -> Result<&Session, HandlerError> {
        self.matrix
            .session(self.conn)
            .ok_or_else(|| HandlerError::Internal(format!("no session for {}", self.conn)))
    }

    pub fn session_mut(&mut self) -> Result<&mut Session, HandlerError> {
        let conn = self.conn;
        self.matrix
            .session_mut(conn)
            .ok_or_else(|| HandlerError::Internal(format!("no session for {conn}")))
    }

    /// Requester's nickname, or `*` before NICK.
    pub fn nick(&self) -> String {
        self.matrix
            .session(self.conn)
            .map_or_else(|| "*".to_string(), |s| s.nick_or_star().to_string())
    }

    pub fn server_name(&self) -> &str {
        &self.matrix.server_info.name
    }

    pub fn server_prefix(&self) -> Prefix {
        Prefix::ServerName(self.matrix.server_info.name.clone())
    }

    /// `nick!user@localhost` of the requester.
    pub fn user_prefix(&self) -> Result<Prefix, HandlerError> {
        Ok(self.session()?.prefix())
    }

    pub fn is_oper(&self) -> bool {
        self.matrix.session(self.conn).is_some_and(Session::is_oper)
    }

    /// Gate for IRC-operator commands.
    pub fn require_oper(&self) -> HandlerResult {
        if self.is_oper() {
            Ok(())
        } else {
            Err(HandlerError::NoPrivileges)
        }
    }

    /// Queue a frame to the requester as-is.
    pub fn send(&self, msg: Message) {
        self.matrix.send_to(self.conn, msg);
    }

    /// Queue a frame to the requester with the server prefix attached.
    pub fn reply(&self, msg: Message) {
        let msg = msg.with_prefix(self.server_prefix());
        self.send(msg);
    }

    /// Numeric reply addressed to the requester; `params` follow the target.
    pub fn send_reply(&self, response: Response, params: Vec<String>) {
        let mut args = Vec::with_capacity(params.len() + 1);
        args.push(self.nick());
        args.extend(params);
        self.reply(Response::numeric(response, args));
    }

    /// Report a per-target failure without aborting the command.
    pub fn send_error(&self, err: &HandlerError, cmd: &str) {
        let nick = self.nick();
        if let Some(reply) = err.to_irc_reply(self.server_name(), &nick, cmd) {
            self.send(reply);
        }
    }

    /// Server NOTICE to the requester.
    pub fn notice(&self, text: impl Into<String>) {
        let nick = self.nick();
        self.reply(Message::notice(nick, text));
    }
}
