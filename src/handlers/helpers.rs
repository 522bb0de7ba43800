//! Reply sequences shared by several handlers.

use ircserv_proto::Response;

use super::core::Context;
use crate::state::Channel;

/// Split a comma-separated target list, skipping empty items.
pub fn split_list(arg: &str) -> impl Iterator<Item = &str> {
    arg.split(',').filter(|item| !item.is_empty())
}

/// Space-separated member nicknames with `@` for channel operators.
pub fn member_names(ctx: &Context<'_>, channel: &Channel) -> String {
    channel
        .members()
        .filter_map(|(id, modes)| {
            let nick = ctx.matrix.session(id)?.nick.as_deref()?;
            Some(match modes.prefix_char() {
                Some(c) => format!("{c}{nick}"),
                None => nick.to_string(),
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 353 and 366 for one channel. A missing channel gets only the 366.
pub fn send_names(ctx: &Context<'_>, name: &str) {
    if let Some(channel) = ctx.matrix.channel(name) {
        let names = member_names(ctx, channel);
        ctx.send_reply(
            Response::RPL_NAMREPLY,
            vec!["=".to_string(), channel.name.clone(), names],
        );
        ctx.reply(Response::rpl_endofnames(&ctx.nick(), &channel.name));
    } else {
        ctx.reply(Response::rpl_endofnames(&ctx.nick(), name));
    }
}

/// 332 and 333 when a topic is set, 331 otherwise.
pub fn send_topic(ctx: &Context<'_>, channel: &Channel) {
    let nick = ctx.nick();
    match &channel.topic {
        Some(topic) => {
            ctx.reply(Response::rpl_topic(&nick, &channel.name, &topic.text));
            ctx.send_reply(
                Response::RPL_TOPICWHOTIME,
                vec![
                    channel.name.clone(),
                    topic.set_by.clone(),
                    topic.set_at.to_string(),
                ],
            );
        }
        None => ctx.reply(Response::rpl_notopic(&nick, &channel.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::*;

    #[test]
    fn split_list_skips_empty() {
        assert_eq!(split_list("#a,,#b,").collect::<Vec<_>>(), vec!["#a", "#b"]);
    }

    #[test]
    fn names_marks_operators() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "Alice");
        let (b, _rb) = register(&mut m, 2, "Bob");
        m.join_channel(a, "#test");
        m.join_channel(b, "#test");

        let ctx = Context::new(a, &mut m);
        send_names(&ctx, "#TEST");
        assert_eq!(
            drain(&mut ra),
            vec![
                ":irc.server.local 353 Alice = #test :@Alice Bob",
                ":irc.server.local 366 Alice #test :End of /NAMES list",
            ]
        );
    }
}
