//! Semantic constructors for `Response`.
//!
//! Each constructor builds an unprefixed numeric [`Message`] carrying the
//! fixed RFC text; callers attach the server prefix with
//! [`Message::with_prefix`].

use crate::command::Command;
use crate::message::Message;
use crate::response::Response;

macro_rules! impl_numeric {
    (
        $(#[$meta:meta])*
        $name:ident, $resp:ident, $msg:literal
    ) => {
        $(#[$meta])*
        pub fn $name(client: &str) -> Message {
            Self::numeric(
                Response::$resp,
                vec![client.to_string(), $msg.to_string()],
            )
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident, $resp:ident, $arg:ident, $msg:literal
    ) => {
        $(#[$meta])*
        pub fn $name(client: &str, $arg: &str) -> Message {
            Self::numeric(
                Response::$resp,
                vec![
                    client.to_string(),
                    $arg.to_string(),
                    $msg.to_string(),
                ],
            )
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident, $resp:ident, fmt($arg:ident, $fmt:literal)
    ) => {
        $(#[$meta])*
        pub fn $name(client: &str, $arg: &str) -> Message {
            Self::numeric(
                Response::$resp,
                vec![
                    client.to_string(),
                    format!($fmt, $arg),
                ],
            )
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident, $resp:ident, $arg1:ident, $arg2:ident, $msg:literal
    ) => {
        $(#[$meta])*
        pub fn $name(client: &str, $arg1: &str, $arg2: &str) -> Message {
            Self::numeric(
                Response::$resp,
                vec![
                    client.to_string(),
                    $arg1.to_string(),
                    $arg2.to_string(),
                    $msg.to_string(),
                ],
            )
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident, $resp:ident, $arg1:ident, $arg2:ident
    ) => {
        $(#[$meta])*
        pub fn $name(client: &str, $arg1: &str, $arg2: &str) -> Message {
            Self::numeric(
                Response::$resp,
                vec![
                    client.to_string(),
                    $arg1.to_string(),
                    $arg2.to_string(),
                ],
            )
        }
    };
}

impl Response {
    /// Build a message carrying this numeric with raw arguments.
    ///
    /// The first argument is the target (client nickname or `*`); the last
    /// one is always written as the trailing parameter.
    pub fn numeric(response: Response, args: Vec<String>) -> Message {
        Message {
            prefix: None,
            command: Command::Response(response, args),
        }
    }

    // === 300-399 Command Replies ===

    impl_numeric!(
        /// `301 RPL_AWAY`
        /// `<nick> :<away message>`
        rpl_away, RPL_AWAY, nick, message
    );

    impl_numeric!(
        /// `305 RPL_UNAWAY`
        rpl_unaway, RPL_UNAWAY, "You are no longer marked as being away"
    );

    impl_numeric!(
        /// `306 RPL_NOWAWAY`
        rpl_nowaway, RPL_NOWAWAY, "You have been marked as being away"
    );

    impl_numeric!(
        /// `313 RPL_WHOISOPERATOR`
        rpl_whoisoperator, RPL_WHOISOPERATOR, nick, "is an IRC operator"
    );

    impl_numeric!(
        /// `315 RPL_ENDOFWHO`
        rpl_endofwho, RPL_ENDOFWHO, mask, "End of WHO list"
    );

    impl_numeric!(
        /// `318 RPL_ENDOFWHOIS`
        rpl_endofwhois, RPL_ENDOFWHOIS, nick, "End of /WHOIS list"
    );

    impl_numeric!(
        /// `323 RPL_LISTEND`
        rpl_listend, RPL_LISTEND, "End of /LIST"
    );

    impl_numeric!(
        /// `331 RPL_NOTOPIC`
        rpl_notopic, RPL_NOTOPIC, channel, "No topic is set"
    );

    impl_numeric!(
        /// `332 RPL_TOPIC`
        /// `<channel> :<topic>`
        rpl_topic, RPL_TOPIC, channel, topic
    );

    impl_numeric!(
        /// `341 RPL_INVITING`
        /// `<nick> <channel>`
        rpl_inviting, RPL_INVITING, nick, channel
    );

    impl_numeric!(
        /// `365 RPL_ENDOFLINKS`
        rpl_endoflinks, RPL_ENDOFLINKS, mask, "End of LINKS list"
    );

    impl_numeric!(
        /// `366 RPL_ENDOFNAMES`
        rpl_endofnames, RPL_ENDOFNAMES, channel, "End of /NAMES list"
    );

    impl_numeric!(
        /// `369 RPL_ENDOFWHOWAS`
        rpl_endofwhowas, RPL_ENDOFWHOWAS, nick, "End of WHOWAS"
    );

    impl_numeric!(
        /// `374 RPL_ENDOFINFO`
        rpl_endofinfo, RPL_ENDOFINFO, "End of INFO list"
    );

    impl_numeric!(
        /// `376 RPL_ENDOFMOTD`
        rpl_endofmotd, RPL_ENDOFMOTD, "End of MOTD command"
    );

    impl_numeric!(
        /// `381 RPL_YOUREOPER`
        rpl_youreoper, RPL_YOUREOPER, "You are now an IRC operator"
    );

    impl_numeric!(
        /// `219 RPL_ENDOFSTATS`
        rpl_endofstats, RPL_ENDOFSTATS, query, "End of STATS report"
    );

    // === 400-599 Error Replies ===

    impl_numeric!(
        /// `401 ERR_NOSUCHNICK`
        /// `<nickname> :No such nick/channel`
        err_nosuchnick, ERR_NOSUCHNICK, nickname, "No such nick/channel"
    );

    impl_numeric!(
        /// `402 ERR_NOSUCHSERVER`
        err_nosuchserver, ERR_NOSUCHSERVER, server, "No such server"
    );

    impl_numeric!(
        /// `403 ERR_NOSUCHCHANNEL`
        err_nosuchchannel, ERR_NOSUCHCHANNEL, channel, "No such channel"
    );

    impl_numeric!(
        /// `404 ERR_CANNOTSENDTOCHAN`
        err_cannotsendtochan, ERR_CANNOTSENDTOCHAN, channel, "Cannot send to channel"
    );

    impl_numeric!(
        /// `406 ERR_WASNOSUCHNICK`
        err_wasnosuchnick, ERR_WASNOSUCHNICK, nickname, "There was no such nickname"
    );

    impl_numeric!(
        /// `409 ERR_NOORIGIN`
        err_noorigin, ERR_NOORIGIN, "No origin specified"
    );

    impl_numeric!(
        /// `411 ERR_NORECIPIENT`
        /// `:No recipient given (<command>)`
        err_norecipient, ERR_NORECIPIENT, fmt(command, "No recipient given ({})")
    );

    impl_numeric!(
        /// `412 ERR_NOTEXTTOSEND`
        err_notexttosend, ERR_NOTEXTTOSEND, "No text to send"
    );

    impl_numeric!(
        /// `421 ERR_UNKNOWNCOMMAND`
        err_unknowncommand, ERR_UNKNOWNCOMMAND, command, "Unknown command"
    );

    impl_numeric!(
        /// `422 ERR_NOMOTD`
        err_nomotd, ERR_NOMOTD, "MOTD File is missing"
    );

    impl_numeric!(
        /// `431 ERR_NONICKNAMEGIVEN`
        err_nonicknamegiven, ERR_NONICKNAMEGIVEN, "No nickname given"
    );

    impl_numeric!(
        /// `432 ERR_ERRONEUSNICKNAME`
        err_erroneusnickname, ERR_ERRONEUSNICKNAME, nick, "Erroneous nickname"
    );

    impl_numeric!(
        /// `433 ERR_NICKNAMEINUSE`
        err_nicknameinuse, ERR_NICKNAMEINUSE, nick, "Nickname is already in use"
    );

    impl_numeric!(
        /// `441 ERR_USERNOTINCHANNEL`
        /// `<nick> <channel> :They aren't on that channel`
        err_usernotinchannel, ERR_USERNOTINCHANNEL, nick, channel, "They aren't on that channel"
    );

    impl_numeric!(
        /// `442 ERR_NOTONCHANNEL`
        err_notonchannel, ERR_NOTONCHANNEL, channel, "You're not on that channel"
    );

    impl_numeric!(
        /// `443 ERR_USERONCHANNEL`
        /// `<nick> <channel> :is already on channel`
        err_useronchannel, ERR_USERONCHANNEL, nick, channel, "is already on channel"
    );

    impl_numeric!(
        /// `445 ERR_SUMMONDISABLED`
        err_summondisabled, ERR_SUMMONDISABLED, "SUMMON has been disabled"
    );

    impl_numeric!(
        /// `446 ERR_USERSDISABLED`
        err_usersdisabled, ERR_USERSDISABLED, "USERS has been disabled"
    );

    impl_numeric!(
        /// `451 ERR_NOTREGISTERED`
        err_notregistered, ERR_NOTREGISTERED, "You have not registered"
    );

    impl_numeric!(
        /// `461 ERR_NEEDMOREPARAMS`
        err_needmoreparams, ERR_NEEDMOREPARAMS, command, "Not enough parameters"
    );

    impl_numeric!(
        /// `462 ERR_ALREADYREGISTRED`
        err_alreadyregistred, ERR_ALREADYREGISTRED, "You may not reregister"
    );

    impl_numeric!(
        /// `464 ERR_PASSWDMISMATCH`
        err_passwdmismatch, ERR_PASSWDMISMATCH, "Password incorrect"
    );

    impl_numeric!(
        /// `471 ERR_CHANNELISFULL`
        err_channelisfull, ERR_CHANNELISFULL, channel, "Cannot join channel (+l)"
    );

    impl_numeric!(
        /// `472 ERR_UNKNOWNMODE`
        err_unknownmode, ERR_UNKNOWNMODE, mode_char, "is unknown mode char to me"
    );

    impl_numeric!(
        /// `473 ERR_INVITEONLYCHAN`
        err_inviteonlychan, ERR_INVITEONLYCHAN, channel, "Cannot join channel (+i)"
    );

    impl_numeric!(
        /// `475 ERR_BADCHANNELKEY`
        err_badchannelkey, ERR_BADCHANNELKEY, channel, "Cannot join channel (+k)"
    );

    impl_numeric!(
        /// `476 ERR_BADCHANMASK`
        err_badchanmask, ERR_BADCHANMASK, channel, "Bad Channel Mask"
    );

    impl_numeric!(
        /// `481 ERR_NOPRIVILEGES`
        err_noprivileges, ERR_NOPRIVILEGES, "Permission Denied- You're not an IRC operator"
    );

    impl_numeric!(
        /// `482 ERR_CHANOPRIVSNEEDED`
        err_chanoprivsneeded, ERR_CHANOPRIVSNEEDED, channel, "You're not channel operator"
    );

    impl_numeric!(
        /// `483 ERR_CANTKILLSERVER`
        err_cantkillserver, ERR_CANTKILLSERVER, "You can't kill a server!"
    );

    impl_numeric!(
        /// `501 ERR_UMODEUNKNOWNFLAG`
        err_umodeunknownflag, ERR_UMODEUNKNOWNFLAG, "Unknown MODE flag"
    );

    impl_numeric!(
        /// `502 ERR_USERSDONTMATCH`
        err_usersdontmatch, ERR_USERSDONTMATCH, "Cant change mode for other users"
    );
}
