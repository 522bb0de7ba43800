use crate::command::Command;
use crate::prefix::Prefix;

/// An owned IRC message.
///
/// # Example
///
/// ```
/// use ircserv_proto::{Message, Prefix};
///
/// let msg: Message = ":nick!user@host PRIVMSG #channel :Hello!".parse().unwrap();
/// assert_eq!(msg.source_nickname(), Some("nick"));
///
/// let reply = Message::privmsg("#channel", "Hello!")
///     .with_prefix(Prefix::new("nick", "user", "localhost"));
/// assert_eq!(reply.to_string(), ":nick!user@localhost PRIVMSG #channel :Hello!\r\n");
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Message {
    /// Origin of the message.
    pub prefix: Option<Prefix>,
    /// The command and its parameters.
    pub command: Command,
}

impl Message {
    /// Nickname from the prefix, if it is a user prefix.
    pub fn source_nickname(&self) -> Option<&str> {
        self.prefix.as_ref().and_then(Prefix::nick)
    }

    /// Set the origin of this message.
    #[must_use]
    pub fn with_prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// `PRIVMSG <target> :<text>`
    #[must_use]
    pub fn privmsg(target: impl Into<String>, text: impl Into<String>) -> Self {
        Command::PRIVMSG(target.into(), text.into()).into()
    }

    /// `NOTICE <target> :<text>`
    #[must_use]
    pub fn notice(target: impl Into<String>, text: impl Into<String>) -> Self {
        Command::NOTICE(target.into(), text.into()).into()
    }

    /// `JOIN <channel>`
    #[must_use]
    pub fn join(channel: impl Into<String>) -> Self {
        Command::JOIN(channel.into(), None).into()
    }

    /// `PART <channel> :<reason>`
    #[must_use]
    pub fn part_with_message(channel: impl Into<String>, reason: impl Into<String>) -> Self {
        Command::PART(channel.into(), Some(reason.into())).into()
    }

    /// `NICK :<nickname>`
    #[must_use]
    pub fn nick(nickname: impl Into<String>) -> Self {
        Command::NICK(nickname.into()).into()
    }

    /// `PONG <server> :<token>`
    #[must_use]
    pub fn pong_with_token(server: impl Into<String>, token: impl Into<String>) -> Self {
        Command::PONG(server.into(), Some(token.into())).into()
    }

    /// `QUIT :<reason>`
    #[must_use]
    pub fn quit_with_message(reason: impl Into<String>) -> Self {
        Command::QUIT(Some(reason.into())).into()
    }

    /// `KICK <channel> <nick> :<reason>`
    #[must_use]
    pub fn kick_with_reason(
        channel: impl Into<String>,
        nickname: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Command::KICK(channel.into(), nickname.into(), Some(reason.into())).into()
    }

    /// `ERROR :<text>`
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Command::ERROR(text.into()).into()
    }
}

impl From<Command> for Message {
    fn from(cmd: Command) -> Message {
        Message {
            prefix: None,
            command: cmd,
        }
    }
}
