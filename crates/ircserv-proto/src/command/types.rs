//! Typed IRC commands.

use crate::response::Response;

/// An IRC command with its parameters.
///
/// Commands the daemon emits or that clients commonly send get a typed
/// variant; everything else is carried as [`Command::Raw`]. Parsing a
/// known verb with the wrong number of arguments also yields `Raw`, so the
/// conversion never fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `PASS <password>`
    PASS(String),
    /// `NICK <nickname>`
    NICK(String),
    /// `USER <user> <mode> * :<realname>`
    USER(String, String, String),
    /// `OPER <name> <password>`
    OPER(String, String),
    /// `QUIT [:<reason>]`
    QUIT(Option<String>),
    /// `JOIN <channels> [<keys>]`
    JOIN(String, Option<String>),
    /// `PART <channels> [:<reason>]`
    PART(String, Option<String>),
    /// `TOPIC <channel> [:<topic>]`
    TOPIC(String, Option<String>),
    /// `NAMES [<channels>]`
    NAMES(Option<String>),
    /// `LIST [<channels>]`
    LIST(Option<String>),
    /// `INVITE <nick> <channel>`
    INVITE(String, String),
    /// `KICK <channel> <nick> [:<reason>]`
    KICK(String, String, Option<String>),
    /// `MODE <target> [<modes> [<args>...]]`
    MODE(String, Vec<String>),
    /// `PRIVMSG <target> :<text>`
    PRIVMSG(String, String),
    /// `NOTICE <target> :<text>`
    NOTICE(String, String),
    /// `WALLOPS :<text>`
    WALLOPS(String),
    /// `KILL <nick> :<reason>`
    KILL(String, String),
    /// `PING <server> [:<token>]`
    PING(String, Option<String>),
    /// `PONG <server> [:<token>]`
    PONG(String, Option<String>),
    /// `ERROR :<message>`
    ERROR(String),
    /// `AWAY [:<message>]`
    AWAY(Option<String>),
    /// A numeric reply; the first argument is the target.
    Response(Response, Vec<String>),
    /// Any other command, verbatim.
    Raw(String, Vec<String>),
}

impl Command {
    /// The command verb as it appears on the wire.
    pub fn name(&self) -> String {
        match self {
            Command::PASS(_) => "PASS".into(),
            Command::NICK(_) => "NICK".into(),
            Command::USER(..) => "USER".into(),
            Command::OPER(..) => "OPER".into(),
            Command::QUIT(_) => "QUIT".into(),
            Command::JOIN(..) => "JOIN".into(),
            Command::PART(..) => "PART".into(),
            Command::TOPIC(..) => "TOPIC".into(),
            Command::NAMES(_) => "NAMES".into(),
            Command::LIST(_) => "LIST".into(),
            Command::INVITE(..) => "INVITE".into(),
            Command::KICK(..) => "KICK".into(),
            Command::MODE(..) => "MODE".into(),
            Command::PRIVMSG(..) => "PRIVMSG".into(),
            Command::NOTICE(..) => "NOTICE".into(),
            Command::WALLOPS(_) => "WALLOPS".into(),
            Command::KILL(..) => "KILL".into(),
            Command::PING(..) => "PING".into(),
            Command::PONG(..) => "PONG".into(),
            Command::ERROR(_) => "ERROR".into(),
            Command::AWAY(_) => "AWAY".into(),
            Command::Response(resp, _) => resp.to_string(),
            Command::Raw(cmd, _) => cmd.clone(),
        }
    }
}
