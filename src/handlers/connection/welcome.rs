//! Registration completion and the 001-004 welcome burst.

use ircserv_proto::Response;
use tracing::info;

use crate::error::HandlerResult;
use crate::handlers::Context;
use crate::state::SessionPhase;

/// User modes advertised in 004.
const USER_MODES: &str = "io";
/// Channel modes advertised in 004.
const CHANNEL_MODES: &str = "itklno";

/// `ircserv-<crate version>`
pub fn version_string(ctx: &Context<'_>) -> String {
    format!("ircserv-{}", ctx.matrix.server_info.version)
}

/// Complete registration once the predicate holds. The burst is sent at
/// most once per session.
pub fn try_complete_registration(ctx: &mut Context<'_>) -> HandlerResult {
    let password_required = ctx.matrix.password.is_some();
    let session = ctx.session_mut()?;
    if session.welcomed || !session.can_register(password_required) {
        return Ok(());
    }
    session.phase = SessionPhase::Registered;
    session.welcomed = true;
    let mask = session.prefix().to_string();
    let addr = session.addr;

    let nick = ctx.nick();
    let server = ctx.server_name().to_string();
    let version = version_string(ctx);
    let created = ctx
        .matrix
        .server_info
        .created
        .format("%a %b %e %Y at %H:%M:%S UTC")
        .to_string();

    info!(nick = %nick, %addr, "Client registered");

    ctx.send_reply(
        Response::RPL_WELCOME,
        vec![format!("Welcome to the Internet Relay Network {mask}")],
    );
    ctx.send_reply(
        Response::RPL_YOURHOST,
        vec![format!("Your host is {server}, running version {version}")],
    );
    ctx.send_reply(
        Response::RPL_CREATED,
        vec![format!("This server was created {created}")],
    );
    ctx.send_reply(
        Response::RPL_MYINFO,
        vec![
            server,
            version,
            USER_MODES.to_string(),
            CHANNEL_MODES.to_string(),
        ],
    );
    Ok(())
}
