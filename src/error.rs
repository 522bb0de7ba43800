//! Unified error handling for ircserv.
//!
//! Handler failures map onto exactly one numeric reply each.

use ircserv_proto::{Message, Prefix, Response};
use thiserror::Error;

/// Longest command token echoed back in a 421 reply.
const MAX_ECHOED_COMMAND: usize = 32;

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Errors that can occur during command handling.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("not enough parameters")]
    NeedMoreParams,

    #[error("no text to send")]
    NoTextToSend,

    #[error("no recipient given")]
    NoRecipient,

    #[error("no nickname given")]
    NoNicknameGiven,

    #[error("nickname in use: {0}")]
    NicknameInUse(String),

    #[error("erroneous nickname: {0}")]
    ErroneousNickname(String),

    #[error("not registered")]
    NotRegistered,

    #[error("already registered")]
    AlreadyRegistered,

    #[error("password mismatch")]
    PasswdMismatch,

    #[error("no such nick: {0}")]
    NoSuchNick(String),

    #[error("no such channel: {0}")]
    NoSuchChannel(String),

    #[error("no such server: {0}")]
    NoSuchServer(String),

    #[error("permission denied")]
    NoPrivileges,

    #[error("cannot kill a server")]
    CantKillServer,

    #[error("bad channel mask: {0}")]
    BadChanMask(String),

    #[error("cannot send to channel: {0}")]
    CannotSendToChan(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{1} ({0})")]
    Channel(String, ChannelError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NeedMoreParams => "need_more_params",
            Self::NoTextToSend => "no_text_to_send",
            Self::NoRecipient => "no_recipient",
            Self::NoNicknameGiven => "no_nickname_given",
            Self::NicknameInUse(_) => "nickname_in_use",
            Self::ErroneousNickname(_) => "erroneous_nickname",
            Self::NotRegistered => "not_registered",
            Self::AlreadyRegistered => "already_registered",
            Self::PasswdMismatch => "passwd_mismatch",
            Self::NoSuchNick(_) => "no_such_nick",
            Self::NoSuchChannel(_) => "no_such_channel",
            Self::NoSuchServer(_) => "no_such_server",
            Self::NoPrivileges => "no_privileges",
            Self::CantKillServer => "cant_kill_server",
            Self::BadChanMask(_) => "bad_chan_mask",
            Self::CannotSendToChan(_) => "cannot_send_to_chan",
            Self::UnknownCommand(_) => "unknown_command",
            Self::Channel(_, _) => "channel",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Convert to an IRC error reply message.
    ///
    /// Returns `None` for errors that don't warrant a client-visible reply.
    pub fn to_irc_reply(&self, server_name: &str, nick: &str, cmd_name: &str) -> Option<Message> {
        let msg = match self {
            Self::NotRegistered => Response::err_notregistered(nick),
            Self::NeedMoreParams => Response::err_needmoreparams(nick, cmd_name),
            Self::NoTextToSend => Response::err_notexttosend(nick),
            Self::NoRecipient => Response::err_norecipient(nick, cmd_name),
            Self::NoNicknameGiven => Response::err_nonicknamegiven(nick),
            Self::NicknameInUse(bad_nick) => Response::err_nicknameinuse(nick, bad_nick),
            Self::ErroneousNickname(bad_nick) => Response::err_erroneusnickname(nick, bad_nick),
            Self::AlreadyRegistered => Response::err_alreadyregistred(nick),
            Self::PasswdMismatch => Response::err_passwdmismatch(nick),
            Self::NoSuchNick(target) => Response::err_nosuchnick(nick, target),
            Self::NoSuchChannel(chan) => Response::err_nosuchchannel(nick, chan),
            Self::NoSuchServer(server) => Response::err_nosuchserver(nick, server),
            Self::NoPrivileges => Response::err_noprivileges(nick),
            Self::CantKillServer => Response::err_cantkillserver(nick),
            Self::BadChanMask(chan) => Response::err_badchanmask(nick, chan),
            Self::CannotSendToChan(chan) => Response::err_cannotsendtochan(nick, chan),
            Self::UnknownCommand(cmd) => {
                let echoed = match cmd.char_indices().nth(MAX_ECHOED_COMMAND) {
                    Some((end, _)) => &cmd[..end],
                    None => cmd.as_str(),
                };
                Response::err_unknowncommand(nick, echoed)
            }
            Self::Channel(chan, err) => return Some(err.to_irc_reply(server_name, nick, chan)),
            Self::Internal(_) => return None,
        };

        Some(msg.with_prefix(Prefix::ServerName(server_name.to_string())))
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

// ============================================================================
// Channel Errors (join eligibility and permissions)
// ============================================================================

/// Channel operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("not on channel")]
    NotOnChannel,

    #[error("you're not channel operator")]
    ChanOpPrivsNeeded,

    #[error("user {0} is not on that channel")]
    UserNotInChannel(String),

    #[error("user {0} is already on that channel")]
    UserOnChannel(String),

    #[error("cannot join channel (+i)")]
    InviteOnlyChan,

    #[error("cannot join channel (+k)")]
    BadChannelKey,

    #[error("cannot join channel (+l)")]
    ChannelIsFull,
}

impl ChannelError {
    /// Convert to an IRC error reply message.
    pub fn to_irc_reply(&self, server_name: &str, nick: &str, channel: &str) -> Message {
        let msg = match self {
            Self::NotOnChannel => Response::err_notonchannel(nick, channel),
            Self::ChanOpPrivsNeeded => Response::err_chanoprivsneeded(nick, channel),
            Self::UserNotInChannel(target) => Response::err_usernotinchannel(nick, target, channel),
            Self::UserOnChannel(target) => Response::err_useronchannel(nick, target, channel),
            Self::InviteOnlyChan => Response::err_inviteonlychan(nick, channel),
            Self::BadChannelKey => Response::err_badchannelkey(nick, channel),
            Self::ChannelIsFull => Response::err_channelisfull(nick, channel),
        };

        msg.with_prefix(Prefix::ServerName(server_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ircserv_proto::Command;

    #[test]
    fn test_handler_error_codes() {
        assert_eq!(HandlerError::NeedMoreParams.error_code(), "need_more_params");
        assert_eq!(HandlerError::NotRegistered.error_code(), "not_registered");
        assert_eq!(HandlerError::Internal("test".into()).error_code(), "internal_error");
    }

    #[test]
    fn test_unknown_command_echo_is_bounded() {
        let verb = "A".repeat(510);
        let reply = HandlerError::UnknownCommand(verb)
            .to_irc_reply("irc.server.local", "alice", "")
            .unwrap()
            .to_string();
        assert_eq!(
            reply,
            format!(":irc.server.local 421 alice {} :Unknown command\r\n", "A".repeat(32))
        );
        assert!(reply.len() <= 512);

        let reply = HandlerError::UnknownCommand("FOO".into())
            .to_irc_reply("irc.server.local", "alice", "FOO")
            .unwrap();
        assert_eq!(
            reply.to_string(),
            ":irc.server.local 421 alice FOO :Unknown command\r\n"
        );
    }

    #[test]
    fn test_handler_error_to_irc_reply() {
        let reply = HandlerError::NeedMoreParams
            .to_irc_reply("irc.server.local", "alice", "JOIN")
            .unwrap();
        assert_eq!(
            reply.to_string(),
            ":irc.server.local 461 alice JOIN :Not enough parameters\r\n"
        );

        let reply = HandlerError::NotRegistered
            .to_irc_reply("irc.server.local", "*", "JOIN")
            .unwrap();
        assert_eq!(
            reply.to_string(),
            ":irc.server.local 451 * :You have not registered\r\n"
        );

        // Internal errors don't generate replies
        assert!(HandlerError::Internal("oops".into())
            .to_irc_reply("irc.server.local", "alice", "JOIN")
            .is_none());
    }

    #[test]
    fn test_channel_error_to_irc_reply() {
        let reply = ChannelError::NotOnChannel.to_irc_reply("irc.server.local", "alice", "#test");
        assert!(matches!(reply.command, Command::Response(Response::ERR_NOTONCHANNEL, _)));

        let reply = HandlerError::Channel("#test".into(), ChannelError::InviteOnlyChan)
            .to_irc_reply("irc.server.local", "bob", "JOIN")
            .unwrap();
        assert_eq!(
            reply.to_string(),
            ":irc.server.local 473 bob #test :Cannot join channel (+i)\r\n"
        );
    }

    #[test]
    fn test_usernotinchannel_argument_order() {
        let reply = ChannelError::UserNotInChannel("carol".into())
            .to_irc_reply("irc.server.local", "alice", "#test");
        assert_eq!(
            reply.to_string(),
            ":irc.server.local 441 alice carol #test :They aren't on that channel\r\n"
        );
    }
}
