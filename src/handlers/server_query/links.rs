//! LINKS command handler.

use ircserv_proto::{MessageRef, Response};

use crate::error::HandlerResult;
use crate::handlers::{Context, Handler};

/// Handler for LINKS command.
///
/// `LINKS [[remote] mask]`. Only this server is ever listed.
pub struct LinksHandler;

impl Handler for LinksHandler {
    fn handle(&self, ctx: &mut Context<'_>, _msg: &MessageRef<'_>) -> HandlerResult {
        let info = &ctx.matrix.server_info;

        // RPL_LINKS (364): <mask> <server> :<hopcount> <info>
        ctx.send_reply(
            Response::RPL_LINKS,
            vec![
                info.name.clone(),
                info.name.clone(),
                format!("0 {}", info.description),
            ],
        );
        ctx.reply(Response::rpl_endoflinks(&ctx.nick(), "*"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::*;

    #[test]
    fn lists_only_self() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        line(&mut m, a, "LINKS");
        assert_eq!(
            drain(&mut ra),
            vec![
                ":irc.server.local 364 alice irc.server.local irc.server.local :0 ircserv single-server IRC daemon",
                ":irc.server.local 365 alice * :End of LINKS list",
            ]
        );
    }
}
