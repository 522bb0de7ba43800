//! NOTICE command handler.

use ircserv_proto::MessageRef;
use tracing::trace;

use super::delivery::{MessageKind, deliver};
use crate::error::HandlerResult;
use crate::handlers::helpers::split_list;
use crate::handlers::{Context, Handler};

/// Handler for NOTICE command.
///
/// Like PRIVMSG, but no failure ever produces a reply.
pub struct NoticeHandler;

impl Handler for NoticeHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let (Some(targets), Some(text)) = (msg.arg(0), msg.arg(1)) else {
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }
        for target in split_list(targets) {
            if let Err(e) = deliver(ctx, MessageKind::Notice, target, text) {
                trace!(target = %target, error = %e, "NOTICE dropped");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::*;

    #[test]
    fn never_replies_with_errors() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        let (b, _rb) = register(&mut m, 2, "bob");
        m.join_channel(b, "#closed");

        for text in [
            "NOTICE",
            "NOTICE bob",
            "NOTICE bob :",
            "NOTICE nobody :x",
            "NOTICE #nowhere :x",
            "NOTICE #closed :x",
        ] {
            line(&mut m, a, text);
        }
        assert!(drain(&mut ra).is_empty());
    }

    #[test]
    fn case_mismatch_is_dropped_silently() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        let (_b, mut rb) = register(&mut m, 2, "Bob");

        line(&mut m, a, "NOTICE bob :psst");
        assert!(drain(&mut ra).is_empty());
        assert!(drain(&mut rb).is_empty());
    }

    #[test]
    fn delivers_to_user_without_away_reply() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        let (b, mut rb) = register(&mut m, 2, "bob");
        m.session_mut(b).unwrap().away = Some("out".into());

        line(&mut m, a, "NOTICE bob :heads up");
        assert_eq!(
            drain(&mut rb),
            vec![":alice!alice@localhost NOTICE bob :heads up"]
        );
        assert!(drain(&mut ra).is_empty());
    }
}
