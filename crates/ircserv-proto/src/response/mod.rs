//! IRC numeric response codes.
//!
//! Only the numerics this server actually emits are listed. Codes are
//! three-digit numbers; values below 400 are replies, 400 and above errors.
//!
//! # Reference
//! - RFC 1459 Section 6 / RFC 2812 Section 5

#![allow(non_camel_case_types)]

mod constructors;
mod helpers;

pub use helpers::ParseResponseError;

/// IRC server response code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Response {
    // === Connection Registration (001-099) ===
    /// 001 - Welcome to the IRC network
    RPL_WELCOME = 1,
    /// 002 - Your host is running version
    RPL_YOURHOST = 2,
    /// 003 - Server creation date
    RPL_CREATED = 3,
    /// 004 - Server info (name, version, user modes, channel modes)
    RPL_MYINFO = 4,

    // === Command Responses (200-399) ===
    /// 212 - Command usage statistics
    RPL_STATSCOMMANDS = 212,
    /// 219 - End of STATS report
    RPL_ENDOFSTATS = 219,
    /// 221 - User mode string
    RPL_UMODEIS = 221,
    /// 242 - Server uptime
    RPL_STATSUPTIME = 242,
    /// 256 - Administrative info header
    RPL_ADMINME = 256,
    /// 257 - Admin location line 1
    RPL_ADMINLOC1 = 257,
    /// 258 - Admin location line 2
    RPL_ADMINLOC2 = 258,
    /// 259 - Admin email
    RPL_ADMINEMAIL = 259,
    /// 301 - Target is away
    RPL_AWAY = 301,
    /// 302 - USERHOST reply
    RPL_USERHOST = 302,
    /// 303 - ISON reply
    RPL_ISON = 303,
    /// 305 - No longer away
    RPL_UNAWAY = 305,
    /// 306 - Now away
    RPL_NOWAWAY = 306,
    /// 311 - WHOIS user line
    RPL_WHOISUSER = 311,
    /// 312 - WHOIS server line
    RPL_WHOISSERVER = 312,
    /// 313 - WHOIS operator line
    RPL_WHOISOPERATOR = 313,
    /// 315 - End of WHO
    RPL_ENDOFWHO = 315,
    /// 318 - End of WHOIS
    RPL_ENDOFWHOIS = 318,
    /// 319 - WHOIS channel list
    RPL_WHOISCHANNELS = 319,
    /// 322 - LIST entry
    RPL_LIST = 322,
    /// 323 - End of LIST
    RPL_LISTEND = 323,
    /// 324 - Channel mode string
    RPL_CHANNELMODEIS = 324,
    /// 331 - No topic set
    RPL_NOTOPIC = 331,
    /// 332 - Channel topic
    RPL_TOPIC = 332,
    /// 333 - Topic setter and time
    RPL_TOPICWHOTIME = 333,
    /// 341 - Invitation sent
    RPL_INVITING = 341,
    /// 351 - Server version
    RPL_VERSION = 351,
    /// 352 - WHO entry
    RPL_WHOREPLY = 352,
    /// 353 - NAMES entry
    RPL_NAMREPLY = 353,
    /// 364 - LINKS entry
    RPL_LINKS = 364,
    /// 365 - End of LINKS
    RPL_ENDOFLINKS = 365,
    /// 366 - End of NAMES
    RPL_ENDOFNAMES = 366,
    /// 369 - End of WHOWAS
    RPL_ENDOFWHOWAS = 369,
    /// 371 - INFO line
    RPL_INFO = 371,
    /// 372 - MOTD line
    RPL_MOTD = 372,
    /// 374 - End of INFO
    RPL_ENDOFINFO = 374,
    /// 375 - MOTD header
    RPL_MOTDSTART = 375,
    /// 376 - End of MOTD
    RPL_ENDOFMOTD = 376,
    /// 381 - Now an IRC operator
    RPL_YOUREOPER = 381,
    /// 382 - Rehashing configuration
    RPL_REHASHING = 382,
    /// 391 - Server local time
    RPL_TIME = 391,

    // === Error Replies (400-599) ===
    /// 401 - No such nick/channel
    ERR_NOSUCHNICK = 401,
    /// 402 - No such server
    ERR_NOSUCHSERVER = 402,
    /// 403 - No such channel
    ERR_NOSUCHCHANNEL = 403,
    /// 404 - Cannot send to channel
    ERR_CANNOTSENDTOCHAN = 404,
    /// 406 - There was no such nickname
    ERR_WASNOSUCHNICK = 406,
    /// 409 - No origin specified
    ERR_NOORIGIN = 409,
    /// 411 - No recipient given
    ERR_NORECIPIENT = 411,
    /// 412 - No text to send
    ERR_NOTEXTTOSEND = 412,
    /// 421 - Unknown command
    ERR_UNKNOWNCOMMAND = 421,
    /// 422 - MOTD file missing
    ERR_NOMOTD = 422,
    /// 431 - No nickname given
    ERR_NONICKNAMEGIVEN = 431,
    /// 432 - Erroneous nickname
    ERR_ERRONEUSNICKNAME = 432,
    /// 433 - Nickname in use
    ERR_NICKNAMEINUSE = 433,
    /// 441 - Target not on channel
    ERR_USERNOTINCHANNEL = 441,
    /// 442 - You're not on that channel
    ERR_NOTONCHANNEL = 442,
    /// 443 - Target already on channel
    ERR_USERONCHANNEL = 443,
    /// 445 - SUMMON disabled
    ERR_SUMMONDISABLED = 445,
    /// 446 - USERS disabled
    ERR_USERSDISABLED = 446,
    /// 451 - Not registered
    ERR_NOTREGISTERED = 451,
    /// 461 - Not enough parameters
    ERR_NEEDMOREPARAMS = 461,
    /// 462 - Already registered
    ERR_ALREADYREGISTRED = 462,
    /// 464 - Password incorrect
    ERR_PASSWDMISMATCH = 464,
    /// 471 - Channel is full (+l)
    ERR_CHANNELISFULL = 471,
    /// 472 - Unknown mode character
    ERR_UNKNOWNMODE = 472,
    /// 473 - Invite only channel (+i)
    ERR_INVITEONLYCHAN = 473,
    /// 475 - Bad channel key (+k)
    ERR_BADCHANNELKEY = 475,
    /// 476 - Bad channel mask
    ERR_BADCHANMASK = 476,
    /// 481 - Not an IRC operator
    ERR_NOPRIVILEGES = 481,
    /// 482 - Not a channel operator
    ERR_CHANOPRIVSNEEDED = 482,
    /// 483 - Cannot kill a server
    ERR_CANTKILLSERVER = 483,
    /// 501 - Unknown user mode flag
    ERR_UMODEUNKNOWNFLAG = 501,
    /// 502 - Cannot change mode for other users
    ERR_USERSDONTMATCH = 502,
}

impl Response {
    /// Every numeric known to this crate, in ascending order.
    pub const ALL: &'static [Response] = &[
        Response::RPL_WELCOME,
        Response::RPL_YOURHOST,
        Response::RPL_CREATED,
        Response::RPL_MYINFO,
        Response::RPL_STATSCOMMANDS,
        Response::RPL_ENDOFSTATS,
        Response::RPL_UMODEIS,
        Response::RPL_STATSUPTIME,
        Response::RPL_ADMINME,
        Response::RPL_ADMINLOC1,
        Response::RPL_ADMINLOC2,
        Response::RPL_ADMINEMAIL,
        Response::RPL_AWAY,
        Response::RPL_USERHOST,
        Response::RPL_ISON,
        Response::RPL_UNAWAY,
        Response::RPL_NOWAWAY,
        Response::RPL_WHOISUSER,
        Response::RPL_WHOISSERVER,
        Response::RPL_WHOISOPERATOR,
        Response::RPL_ENDOFWHO,
        Response::RPL_ENDOFWHOIS,
        Response::RPL_WHOISCHANNELS,
        Response::RPL_LIST,
        Response::RPL_LISTEND,
        Response::RPL_CHANNELMODEIS,
        Response::RPL_NOTOPIC,
        Response::RPL_TOPIC,
        Response::RPL_TOPICWHOTIME,
        Response::RPL_INVITING,
        Response::RPL_VERSION,
        Response::RPL_WHOREPLY,
        Response::RPL_NAMREPLY,
        Response::RPL_LINKS,
        Response::RPL_ENDOFLINKS,
        Response::RPL_ENDOFNAMES,
        Response::RPL_ENDOFWHOWAS,
        Response::RPL_INFO,
        Response::RPL_MOTD,
        Response::RPL_ENDOFINFO,
        Response::RPL_MOTDSTART,
        Response::RPL_ENDOFMOTD,
        Response::RPL_YOUREOPER,
        Response::RPL_REHASHING,
        Response::RPL_TIME,
        Response::ERR_NOSUCHNICK,
        Response::ERR_NOSUCHSERVER,
        Response::ERR_NOSUCHCHANNEL,
        Response::ERR_CANNOTSENDTOCHAN,
        Response::ERR_WASNOSUCHNICK,
        Response::ERR_NOORIGIN,
        Response::ERR_NORECIPIENT,
        Response::ERR_NOTEXTTOSEND,
        Response::ERR_UNKNOWNCOMMAND,
        Response::ERR_NOMOTD,
        Response::ERR_NONICKNAMEGIVEN,
        Response::ERR_ERRONEUSNICKNAME,
        Response::ERR_NICKNAMEINUSE,
        Response::ERR_USERNOTINCHANNEL,
        Response::ERR_NOTONCHANNEL,
        Response::ERR_USERONCHANNEL,
        Response::ERR_SUMMONDISABLED,
        Response::ERR_USERSDISABLED,
        Response::ERR_NOTREGISTERED,
        Response::ERR_NEEDMOREPARAMS,
        Response::ERR_ALREADYREGISTRED,
        Response::ERR_PASSWDMISMATCH,
        Response::ERR_CHANNELISFULL,
        Response::ERR_UNKNOWNMODE,
        Response::ERR_INVITEONLYCHAN,
        Response::ERR_BADCHANNELKEY,
        Response::ERR_BADCHANMASK,
        Response::ERR_NOPRIVILEGES,
        Response::ERR_CHANOPRIVSNEEDED,
        Response::ERR_CANTKILLSERVER,
        Response::ERR_UMODEUNKNOWNFLAG,
        Response::ERR_USERSDONTMATCH,
    ];
}
