//! Command handler registry and dispatch.
//!
//! The `Registry` maps upper-cased command names to handlers, applies the
//! registration gate and counts dispatches for STATS m.

use std::collections::HashMap;

use ircserv_proto::{MessageRef, Response};
use tracing::debug;

use super::context::{Context, Handler};
use crate::error::HandlerError;
use crate::handlers::{
    cap::CapHandler,
    channel::{
        InviteHandler, JoinHandler, KickHandler, ListHandler, NamesHandler, PartHandler,
        TopicHandler,
    },
    connection::{NickHandler, PassHandler, PingHandler, PongHandler, QuitHandler, UserHandler},
    messaging::{NoticeHandler, PrivmsgHandler},
    mode::ModeHandler,
    oper::{
        ConnectHandler, KillHandler, OperHandler, RehashHandler, RestartHandler, SquitHandler,
        WallopsHandler,
    },
    server_query::{
        AdminHandler, InfoHandler, LinksHandler, MotdHandler, StatsHandler, SummonHandler,
        TimeHandler, UsersHandler, VersionHandler,
    },
    user_query::{IsonHandler, UserhostHandler, WhoHandler, WhoisHandler, WhowasHandler},
    user_status::AwayHandler,
};
use crate::telemetry::spans;

struct Entry {
    handler: Box<dyn Handler>,
    /// Usable before registration completes.
    pre_registration: bool,
}

/// Registry of command handlers.
pub struct Registry {
    handlers: HashMap<&'static str, Entry>,
}

impl Registry {
    /// Create a new registry with all handlers registered.
    pub fn new() -> Self {
        let mut registry = Self {
            handlers: HashMap::new(),
        };

        // Connection/registration handlers
        registry.pre("CAP", CapHandler);
        registry.pre("PASS", PassHandler);
        registry.pre("NICK", NickHandler);
        registry.pre("USER", UserHandler);
        registry.pre("PING", PingHandler);
        registry.pre("PONG", PongHandler);
        registry.pre("QUIT", QuitHandler);

        // Channel handlers
        registry.post("JOIN", JoinHandler);
        registry.post("PART", PartHandler);
        registry.post("KICK", KickHandler);
        registry.post("TOPIC", TopicHandler);
        registry.post("INVITE", InviteHandler);
        registry.post("NAMES", NamesHandler);
        registry.post("LIST", ListHandler);
        registry.post("MODE", ModeHandler);

        // Messaging handlers
        registry.post("PRIVMSG", PrivmsgHandler);
        registry.post("NOTICE", NoticeHandler);

        // User query handlers
        registry.post("WHOIS", WhoisHandler);
        registry.post("WHO", WhoHandler);
        registry.post("WHOWAS", WhowasHandler);
        registry.post("USERHOST", UserhostHandler);
        registry.post("ISON", IsonHandler);
        registry.post("AWAY", AwayHandler);

        // Server query handlers
        registry.post("VERSION", VersionHandler);
        registry.post("TIME", TimeHandler);
        registry.post("ADMIN", AdminHandler);
        registry.post("INFO", InfoHandler);
        registry.post("MOTD", MotdHandler);
        registry.post("LINKS", LinksHandler);
        registry.post("STATS", StatsHandler);
        registry.post("USERS", UsersHandler);
        registry.post("SUMMON", SummonHandler);

        // Operator handlers
        registry.post("OPER", OperHandler);
        registry.post("KILL", KillHandler);
        registry.post("WALLOPS", WallopsHandler);
        registry.post("REHASH", RehashHandler);
        registry.post("RESTART", RestartHandler);
        registry.post("CONNECT", ConnectHandler);
        registry.post("SQUIT", SquitHandler);

        registry
    }

    fn pre(&mut self, name: &'static str, handler: impl Handler + 'static) {
        self.insert(name, handler, true);
    }

    fn post(&mut self, name: &'static str, handler: impl Handler + 'static) {
        self.insert(name, handler, false);
    }

    fn insert(&mut self, name: &'static str, handler: impl Handler + 'static, pre: bool) {
        self.handlers.insert(
            name,
            Entry {
                handler: Box::new(handler),
                pre_registration: pre,
            },
        );
    }

    /// Parse one inbound line and dispatch it.
    ///
    /// Blank lines are ignored. A line that does not parse is an unknown
    /// command for registered clients and dropped otherwise.
    pub fn dispatch_line(&self, ctx: &mut Context<'_>, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        match MessageRef::parse(line) {
            Ok(msg) => self.dispatch(ctx, &msg),
            Err(e) => {
                debug!(conn = %ctx.conn, error = %e, "Unparseable line");
                if ctx.session().is_ok_and(|s| s.is_registered()) {
                    let token = line.split_whitespace().next().unwrap_or_default();
                    ctx.send_error(&HandlerError::UnknownCommand(token.to_string()), token);
                }
            }
        }
    }

    /// Dispatch a parsed message to its handler.
    pub fn dispatch(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) {
        let cmd_name = msg.command_name().to_ascii_uppercase();
        let Ok(session) = ctx.session() else {
            return;
        };
        let registered = session.is_registered();
        let nick = session.nick_or_star().to_string();

        let Some((&name, entry)) = self.handlers.get_key_value(cmd_name.as_str()) else {
            if registered {
                ctx.send_error(&HandlerError::UnknownCommand(cmd_name.clone()), &cmd_name);
            } else {
                debug!(conn = %ctx.conn, command = %cmd_name, "Dropping unknown command before registration");
            }
            return;
        };

        if !entry.pre_registration && !registered {
            ctx.reply(Response::err_notregistered(&nick));
            return;
        }

        *ctx.matrix.command_counts.entry(name).or_default() += 1;

        let span = spans::command(&cmd_name, ctx.conn, &nick);
        let _enter = span.enter();

        if let Err(e) = entry.handler.handle(ctx, msg) {
            debug!(command = %cmd_name, error = %e, code = e.error_code(), "Command error");
            if let Some(reply) = e.to_irc_reply(ctx.server_name(), &nick, &cmd_name) {
                ctx.send(reply);
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::*;

    #[test]
    fn gated_command_before_registration() {
        let mut m = matrix();
        let (id, mut rx) = connect(&mut m, 1);
        line(&mut m, id, "JOIN #test");
        assert_eq!(
            drain(&mut rx),
            vec![":irc.server.local 451 * :You have not registered"]
        );
        assert!(m.channels.is_empty());
    }

    #[test]
    fn unknown_command_silent_before_registration() {
        let mut m = matrix();
        let (id, mut rx) = connect(&mut m, 1);
        line(&mut m, id, "FROB x");
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn unknown_command_after_registration() {
        let mut m = matrix();
        let (id, mut rx) = register(&mut m, 1, "alice");
        line(&mut m, id, "frob x");
        assert_eq!(
            drain(&mut rx),
            vec![":irc.server.local 421 alice FROB :Unknown command"]
        );
    }

    #[test]
    fn blank_lines_ignored() {
        let mut m = matrix();
        let (id, mut rx) = register(&mut m, 1, "alice");
        line(&mut m, id, "");
        line(&mut m, id, "   ");
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn commands_are_case_insensitive_and_counted() {
        let mut m = matrix();
        let (id, mut rx) = register(&mut m, 1, "alice");
        line(&mut m, id, "ping tok");
        line(&mut m, id, "PiNg tok");
        assert_eq!(drain(&mut rx).len(), 2);
        assert_eq!(m.command_counts.get("PING"), Some(&2));
    }

    #[test]
    fn handler_error_becomes_one_reply() {
        let mut m = matrix();
        let (id, mut rx) = register(&mut m, 1, "alice");
        line(&mut m, id, "KICK");
        assert_eq!(
            drain(&mut rx),
            vec![":irc.server.local 461 alice KICK :Not enough parameters"]
        );
    }
}
