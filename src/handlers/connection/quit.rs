//! QUIT command handler.

use ircserv_proto::MessageRef;
use tracing::info;

use crate::error::HandlerResult;
use crate::handlers::{Context, Handler};
use crate::state::Departure;

const DEFAULT_REASON: &str = "Client Quit";

/// Handler for QUIT command.
pub struct QuitHandler;

impl Handler for QuitHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let reason = msg
            .arg(0)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_REASON)
            .to_string();

        info!(conn = %ctx.conn, nick = %ctx.nick(), reason = %reason, "Client quit");
        ctx.matrix.disconnect(ctx.conn, Departure::Quit(reason));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::*;

    #[test]
    fn quit_before_registration() {
        let mut m = matrix();
        let (id, mut rx) = connect(&mut m, 1);
        line(&mut m, id, "QUIT");
        assert_eq!(
            drain(&mut rx),
            vec!["ERROR :Closing Link: localhost (Client Quit)"]
        );
        assert!(is_closed(&mut rx));
        assert!(m.session(id).is_none());
    }

    #[test]
    fn quit_notifies_channel_peers() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        let (b, mut rb) = register(&mut m, 2, "bob");
        m.join_channel(a, "#x");
        m.join_channel(b, "#x");

        line(&mut m, a, "QUIT :gone fishing");

        assert_eq!(
            drain(&mut rb),
            vec![":alice!alice@localhost QUIT :gone fishing"]
        );
        assert_eq!(
            drain(&mut ra),
            vec!["ERROR :Closing Link: localhost (gone fishing)"]
        );
        assert_eq!(m.channel("#x").unwrap().member_count(), 1);
    }
}
