//! Conversion from a verb plus arguments into a typed [`Command`].

use super::types::Command;
use crate::response::Response;

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| (*s).to_owned()).collect()
}

impl Command {
    /// Build a command from its name and arguments.
    ///
    /// The verb is matched case-insensitively. Known verbs with an arity
    /// this crate does not model fall back to [`Command::Raw`] with the
    /// upper-cased verb.
    pub fn new(cmd: &str, args: Vec<&str>) -> Command {
        let upper = cmd.to_ascii_uppercase();
        let a = args.as_slice();

        match (upper.as_str(), a) {
            ("PASS", [p]) => Command::PASS((*p).to_owned()),
            ("NICK", [n]) => Command::NICK((*n).to_owned()),
            ("USER", [u, m, _, r]) => {
                Command::USER((*u).to_owned(), (*m).to_owned(), (*r).to_owned())
            }
            ("OPER", [name, pass]) => Command::OPER((*name).to_owned(), (*pass).to_owned()),
            ("QUIT", []) => Command::QUIT(None),
            ("QUIT", [m]) => Command::QUIT(Some((*m).to_owned())),
            ("JOIN", [c]) => Command::JOIN((*c).to_owned(), None),
            ("JOIN", [c, k]) => Command::JOIN((*c).to_owned(), Some((*k).to_owned())),
            ("PART", [c]) => Command::PART((*c).to_owned(), None),
            ("PART", [c, m]) => Command::PART((*c).to_owned(), Some((*m).to_owned())),
            ("TOPIC", [c]) => Command::TOPIC((*c).to_owned(), None),
            ("TOPIC", [c, t]) => Command::TOPIC((*c).to_owned(), Some((*t).to_owned())),
            ("NAMES", []) => Command::NAMES(None),
            ("NAMES", [c]) => Command::NAMES(Some((*c).to_owned())),
            ("LIST", []) => Command::LIST(None),
            ("LIST", [c]) => Command::LIST(Some((*c).to_owned())),
            ("INVITE", [n, c]) => Command::INVITE((*n).to_owned(), (*c).to_owned()),
            ("KICK", [c, n]) => Command::KICK((*c).to_owned(), (*n).to_owned(), None),
            ("KICK", [c, n, r]) => {
                Command::KICK((*c).to_owned(), (*n).to_owned(), Some((*r).to_owned()))
            }
            ("MODE", [target, rest @ ..]) => Command::MODE((*target).to_owned(), owned(rest)),
            ("PRIVMSG", [t, text]) => Command::PRIVMSG((*t).to_owned(), (*text).to_owned()),
            ("NOTICE", [t, text]) => Command::NOTICE((*t).to_owned(), (*text).to_owned()),
            ("WALLOPS", [text]) => Command::WALLOPS((*text).to_owned()),
            ("KILL", [n, r]) => Command::KILL((*n).to_owned(), (*r).to_owned()),
            ("PING", [s]) => Command::PING((*s).to_owned(), None),
            ("PING", [s, t]) => Command::PING((*s).to_owned(), Some((*t).to_owned())),
            ("PONG", [s]) => Command::PONG((*s).to_owned(), None),
            ("PONG", [s, t]) => Command::PONG((*s).to_owned(), Some((*t).to_owned())),
            ("ERROR", [m]) => Command::ERROR((*m).to_owned()),
            ("AWAY", []) => Command::AWAY(None),
            ("AWAY", [m]) => Command::AWAY(Some((*m).to_owned())),
            _ => match upper.parse::<Response>() {
                Ok(resp) => Command::Response(resp, owned(a)),
                Err(_) => Command::Raw(upper, owned(a)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_variants() {
        assert_eq!(
            Command::new("privmsg", vec!["#a", "hi there"]),
            Command::PRIVMSG("#a".into(), "hi there".into())
        );
        assert_eq!(
            Command::new("USER", vec!["al", "0", "*", "Alice A"]),
            Command::USER("al".into(), "0".into(), "Alice A".into())
        );
        assert_eq!(
            Command::new("MODE", vec!["#a", "+kl", "key", "3"]),
            Command::MODE("#a".into(), vec!["+kl".into(), "key".into(), "3".into()])
        );
        assert_eq!(Command::new("QUIT", vec![]), Command::QUIT(None));
    }

    #[test]
    fn test_wrong_arity_is_raw() {
        assert_eq!(
            Command::new("KICK", vec!["#a"]),
            Command::Raw("KICK".into(), vec!["#a".into()])
        );
        assert_eq!(
            Command::new("nick", vec![]),
            Command::Raw("NICK".into(), vec![])
        );
    }

    #[test]
    fn test_numeric() {
        assert_eq!(
            Command::new("433", vec!["*", "bob", "Nickname is already in use"]),
            Command::Response(
                Response::ERR_NICKNAMEINUSE,
                vec!["*".into(), "bob".into(), "Nickname is already in use".into()]
            )
        );
        // Unknown numerics stay raw
        assert!(matches!(Command::new("999", vec![]), Command::Raw(_, _)));
    }
}
