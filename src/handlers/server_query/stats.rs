//! STATS handler for server statistics.

use ircserv_proto::{MessageRef, Response};

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};

/// Handler for STATS command.
///
/// `STATS <query>`: `u` reports uptime, `m` per-command usage. Any other
/// letter yields only the end-of-report line.
pub struct StatsHandler;

impl Handler for StatsHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let query = msg
            .arg(0)
            .filter(|q| !q.is_empty())
            .ok_or(HandlerError::NeedMoreParams)?;

        match query.chars().next() {
            Some('u') => {
                let uptime = ctx.matrix.server_info.uptime().as_secs();
                let days = uptime / 86400;
                let hours = (uptime % 86400) / 3600;
                let minutes = (uptime % 3600) / 60;
                let seconds = uptime % 60;

                // RPL_STATSUPTIME (242)
                ctx.send_reply(
                    Response::RPL_STATSUPTIME,
                    vec![format!(
                        "Server Up {days} days {hours:02}:{minutes:02}:{seconds:02}"
                    )],
                );
            }
            Some('m') => {
                let mut counts: Vec<(&str, u64)> = ctx
                    .matrix
                    .command_counts
                    .iter()
                    .map(|(cmd, count)| (*cmd, *count))
                    .collect();
                counts.sort_unstable();

                // RPL_STATSCOMMANDS (212): <command> <count>
                for (cmd, count) in counts {
                    ctx.send_reply(
                        Response::RPL_STATSCOMMANDS,
                        vec![cmd.to_string(), count.to_string()],
                    );
                }
            }
            _ => {}
        }

        ctx.reply(Response::rpl_endofstats(&ctx.nick(), query));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::*;

    #[test]
    fn uptime() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        line(&mut m, a, "STATS u");
        assert_eq!(
            drain(&mut ra),
            vec![
                ":irc.server.local 242 alice :Server Up 0 days 00:00:00",
                ":irc.server.local 219 alice u :End of STATS report",
            ]
        );
    }

    #[test]
    fn command_usage_counts_dispatches() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        line(&mut m, a, "PING x");
        line(&mut m, a, "ping y");
        drain(&mut ra);

        line(&mut m, a, "STATS m");
        assert_eq!(
            drain(&mut ra),
            vec![
                ":irc.server.local 212 alice PING :2",
                ":irc.server.local 212 alice STATS :1",
                ":irc.server.local 219 alice m :End of STATS report",
            ]
        );
    }

    #[test]
    fn other_letters_and_missing() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        line(&mut m, a, "STATS l");
        line(&mut m, a, "STATS");
        assert_eq!(
            drain(&mut ra),
            vec![
                ":irc.server.local 219 alice l :End of STATS report",
                ":irc.server.local 461 alice STATS :Not enough parameters",
            ]
        );
    }
}
