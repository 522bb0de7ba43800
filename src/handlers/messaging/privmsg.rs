//! PRIVMSG command handler.

use ircserv_proto::MessageRef;

use super::delivery::{MessageKind, deliver};
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::helpers::split_list;
use crate::handlers::{Context, Handler};

/// Handler for PRIVMSG command.
///
/// `PRIVMSG <target>{,<target>} :<text>`; each failing target gets its
/// own error reply.
pub struct PrivmsgHandler;

impl Handler for PrivmsgHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let targets = msg
            .arg(0)
            .filter(|t| !t.is_empty())
            .ok_or(HandlerError::NoRecipient)?;
        let text = msg
            .arg(1)
            .filter(|t| !t.is_empty())
            .ok_or(HandlerError::NoTextToSend)?;

        for target in split_list(targets) {
            if let Err(e) = deliver(ctx, MessageKind::Privmsg, target, text) {
                ctx.send_error(&e, "PRIVMSG");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::*;

    #[test]
    fn direct_message_reaches_only_target() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        let (_b, mut rb) = register(&mut m, 2, "bob");
        let (_c, mut rc) = register(&mut m, 3, "carol");

        line(&mut m, a, "PRIVMSG bob :hi there");
        assert_eq!(
            drain(&mut rb),
            vec![":alice!alice@localhost PRIVMSG bob :hi there"]
        );
        assert!(drain(&mut ra).is_empty());
        assert!(drain(&mut rc).is_empty());
    }

    #[test]
    fn channel_message_skips_sender() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        let (b, mut rb) = register(&mut m, 2, "bob");
        m.join_channel(a, "#c");
        m.join_channel(b, "#c");

        line(&mut m, a, "PRIVMSG #C :hello");
        assert_eq!(
            drain(&mut rb),
            vec![":alice!alice@localhost PRIVMSG #c :hello"]
        );
        assert!(drain(&mut ra).is_empty());
    }

    #[test]
    fn non_member_cannot_send() {
        let mut m = matrix();
        let (a, _ra) = register(&mut m, 1, "alice");
        let (b, mut rb) = register(&mut m, 2, "bob");
        m.join_channel(a, "#c");

        line(&mut m, b, "PRIVMSG #c :let me in");
        assert_eq!(
            drain(&mut rb),
            vec![":irc.server.local 404 bob #c :Cannot send to channel"]
        );
    }

    #[test]
    fn nickname_must_match_exactly() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        let (_b, mut rb) = register(&mut m, 2, "Bob");

        line(&mut m, a, "PRIVMSG bob :hi");
        assert_eq!(
            drain(&mut ra),
            vec![":irc.server.local 401 alice bob :No such nick/channel"]
        );
        assert!(drain(&mut rb).is_empty());

        line(&mut m, a, "PRIVMSG Bob :hi");
        assert_eq!(drain(&mut rb), vec![":alice!alice@localhost PRIVMSG Bob :hi"]);
    }

    #[test]
    fn errors() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        line(&mut m, a, "PRIVMSG");
        line(&mut m, a, "PRIVMSG bob");
        line(&mut m, a, "PRIVMSG nobody,#nowhere :x");
        assert_eq!(
            drain(&mut ra),
            vec![
                ":irc.server.local 411 alice :No recipient given (PRIVMSG)",
                ":irc.server.local 412 alice :No text to send",
                ":irc.server.local 401 alice nobody :No such nick/channel",
                ":irc.server.local 401 alice #nowhere :No such nick/channel",
            ]
        );
    }

    #[test]
    fn away_reply() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        let (b, mut rb) = register(&mut m, 2, "bob");
        m.session_mut(b).unwrap().away = Some("lunch".into());

        line(&mut m, a, "PRIVMSG bob :ping");
        assert_eq!(drain(&mut rb).len(), 1);
        assert_eq!(
            drain(&mut ra),
            vec![":irc.server.local 301 alice bob :lunch"]
        );
    }
}
