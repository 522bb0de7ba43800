use std::fmt;

use super::types::Command;
use super::util::{write_args_with_trailing, write_cmd, write_cmd_freeform};

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::PASS(p) => write_cmd(f, "PASS", &[p]),
            Command::NICK(n) => write_cmd_freeform(f, "NICK", &[n]),
            Command::USER(u, m, r) => write_cmd_freeform(f, "USER", &[u, m, "*", r]),
            Command::OPER(u, p) => write_cmd(f, "OPER", &[u, p]),
            Command::QUIT(Some(m)) => write_cmd_freeform(f, "QUIT", &[m]),
            Command::QUIT(None) => write_cmd(f, "QUIT", &[]),
            Command::JOIN(c, Some(k)) => write_cmd(f, "JOIN", &[c, k]),
            Command::JOIN(c, None) => write_cmd(f, "JOIN", &[c]),
            Command::PART(c, Some(m)) => write_cmd_freeform(f, "PART", &[c, m]),
            Command::PART(c, None) => write_cmd(f, "PART", &[c]),
            Command::TOPIC(c, Some(t)) => write_cmd_freeform(f, "TOPIC", &[c, t]),
            Command::TOPIC(c, None) => write_cmd(f, "TOPIC", &[c]),
            Command::NAMES(Some(c)) => write_cmd(f, "NAMES", &[c]),
            Command::NAMES(None) => write_cmd(f, "NAMES", &[]),
            Command::LIST(Some(c)) => write_cmd(f, "LIST", &[c]),
            Command::LIST(None) => write_cmd(f, "LIST", &[]),
            Command::INVITE(n, c) => write_cmd_freeform(f, "INVITE", &[n, c]),
            Command::KICK(c, n, Some(r)) => write_cmd_freeform(f, "KICK", &[c, n, r]),
            Command::KICK(c, n, None) => write_cmd(f, "KICK", &[c, n]),
            Command::MODE(target, args) => {
                f.write_str("MODE ")?;
                f.write_str(target)?;
                write_args_with_trailing(f, args.iter().map(String::as_str))
            }
            Command::PRIVMSG(t, text) => write_cmd_freeform(f, "PRIVMSG", &[t, text]),
            Command::NOTICE(t, text) => write_cmd_freeform(f, "NOTICE", &[t, text]),
            Command::WALLOPS(text) => write_cmd_freeform(f, "WALLOPS", &[text]),
            Command::KILL(n, r) => write_cmd_freeform(f, "KILL", &[n, r]),
            Command::PING(s, Some(t)) => write_cmd_freeform(f, "PING", &[s, t]),
            Command::PING(s, None) => write_cmd(f, "PING", &[s]),
            Command::PONG(s, Some(t)) => write_cmd_freeform(f, "PONG", &[s, t]),
            Command::PONG(s, None) => write_cmd(f, "PONG", &[s]),
            Command::ERROR(m) => write_cmd_freeform(f, "ERROR", &[m]),
            Command::AWAY(Some(m)) => write_cmd_freeform(f, "AWAY", &[m]),
            Command::AWAY(None) => write_cmd(f, "AWAY", &[]),
            Command::Response(resp, args) => {
                // Numerics always carry their last argument in trailing form.
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                write_cmd_freeform(f, &resp.to_string(), &args)
            }
            Command::Raw(cmd, args) => {
                f.write_str(cmd)?;
                write_args_with_trailing(f, args.iter().map(String::as_str))
            }
        }
    }
}
