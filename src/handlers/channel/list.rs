//! LIST command handler.

use ircserv_proto::{MessageRef, Response};

use crate::error::HandlerResult;
use crate::handlers::helpers::split_list;
use crate::handlers::{Context, Handler};
use crate::state::Channel;

/// Handler for LIST command.
///
/// `LIST [<chan>{,<chan>}]`: one 322 per channel, then 323.
pub struct ListHandler;

impl Handler for ListHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let mut channels: Vec<&Channel> = match msg.arg(0).filter(|a| !a.is_empty()) {
            Some(list) => split_list(list)
                .filter_map(|name| ctx.matrix.channel(name))
                .collect(),
            None => ctx.matrix.channels.values().collect(),
        };
        channels.sort_by(|a, b| a.name.cmp(&b.name));

        for channel in channels {
            let topic = channel
                .topic
                .as_ref()
                .map(|t| t.text.clone())
                .unwrap_or_default();
            ctx.send_reply(
                Response::RPL_LIST,
                vec![
                    channel.name.clone(),
                    channel.member_count().to_string(),
                    topic,
                ],
            );
        }
        ctx.reply(Response::rpl_listend(&ctx.nick()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::*;
    use crate::state::Topic;

    #[test]
    fn lists_count_and_topic() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        let (b, _rb) = register(&mut m, 2, "bob");
        m.join_channel(a, "#chat");
        m.join_channel(b, "#chat");
        m.join_channel(b, "#quiet");
        m.channel_mut("#chat").unwrap().topic = Some(Topic {
            text: "all welcome".into(),
            set_by: "alice".into(),
            set_at: 0,
        });

        line(&mut m, a, "LIST");
        assert_eq!(
            drain(&mut ra),
            vec![
                ":irc.server.local 322 alice #chat 2 :all welcome",
                ":irc.server.local 322 alice #quiet 1 :",
                ":irc.server.local 323 alice :End of /LIST",
            ]
        );

        line(&mut m, a, "LIST #quiet,#missing");
        assert_eq!(
            drain(&mut ra),
            vec![
                ":irc.server.local 322 alice #quiet 1 :",
                ":irc.server.local 323 alice :End of /LIST",
            ]
        );
    }
}
