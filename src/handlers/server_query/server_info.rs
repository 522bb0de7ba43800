//! VERSION, TIME, ADMIN, INFO and MOTD handlers.

use chrono::Local;
use ircserv_proto::{MessageRef, Response};

use super::ensure_local_target;
use crate::error::HandlerResult;
use crate::handlers::connection::version_string;
use crate::handlers::{Context, Handler};

/// Handler for VERSION command.
///
/// `VERSION [target]`
pub struct VersionHandler;

impl Handler for VersionHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        ensure_local_target(ctx, msg.arg(0))?;

        // RPL_VERSION (351): <version> <server> :<comments>
        ctx.send_reply(
            Response::RPL_VERSION,
            vec![
                version_string(ctx),
                ctx.server_name().to_string(),
                "Internet Relay Chat Server".to_string(),
            ],
        );
        Ok(())
    }
}

/// Handler for TIME command.
///
/// `TIME [target]`
pub struct TimeHandler;

impl Handler for TimeHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        ensure_local_target(ctx, msg.arg(0))?;

        ctx.send_reply(
            Response::RPL_TIME,
            vec![ctx.server_name().to_string(), Local::now().to_rfc2822()],
        );
        Ok(())
    }
}

/// Handler for ADMIN command.
///
/// `ADMIN [target]`
pub struct AdminHandler;

impl Handler for AdminHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        ensure_local_target(ctx, msg.arg(0))?;

        let admin = ctx.matrix.config.admin.clone();

        // RPL_ADMINME (256): <server> :Administrative info
        ctx.send_reply(
            Response::RPL_ADMINME,
            vec![
                ctx.server_name().to_string(),
                "Administrative info".to_string(),
            ],
        );
        ctx.send_reply(Response::RPL_ADMINLOC1, vec![admin.location]);
        ctx.send_reply(Response::RPL_ADMINLOC2, vec![admin.organization]);
        ctx.send_reply(Response::RPL_ADMINEMAIL, vec![admin.email]);
        Ok(())
    }
}

/// Handler for INFO command.
///
/// `INFO [target]`
pub struct InfoHandler;

impl Handler for InfoHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        ensure_local_target(ctx, msg.arg(0))?;

        let info = &ctx.matrix.server_info;
        let lines = [
            format!("{} ({})", version_string(ctx), info.description),
            "Single-server Internet Relay Chat daemon".to_string(),
            format!("Birth Date: {}", info.created.format("%a %b %e %Y at %H:%M:%S UTC")),
            format!("On-line for {} seconds", info.uptime().as_secs()),
        ];
        for line in lines {
            ctx.send_reply(Response::RPL_INFO, vec![line]);
        }
        ctx.reply(Response::rpl_endofinfo(&ctx.nick()));
        Ok(())
    }
}

/// Handler for MOTD command.
///
/// `MOTD [target]`
pub struct MotdHandler;

impl Handler for MotdHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        ensure_local_target(ctx, msg.arg(0))?;

        let lines = ctx.matrix.config.motd.lines.clone();
        let nick = ctx.nick();
        if lines.is_empty() {
            ctx.reply(Response::err_nomotd(&nick));
            return Ok(());
        }

        // RPL_MOTDSTART (375): :- <server> Message of the day -
        ctx.send_reply(
            Response::RPL_MOTDSTART,
            vec![format!("- {} Message of the day -", ctx.server_name())],
        );
        for line in lines {
            ctx.send_reply(Response::RPL_MOTD, vec![format!("- {line}")]);
        }
        ctx.reply(Response::rpl_endofmotd(&nick));
        Ok(())
    }
}
