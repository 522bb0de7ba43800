//! Server query handlers: VERSION, TIME, ADMIN, INFO, MOTD, LINKS, STATS,
//! plus the disabled USERS and SUMMON.
//!
//! RFC 2812 §3.4 - Server queries and commands

mod disabled;
mod links;
mod server_info;
mod stats;

pub use disabled::{SummonHandler, UsersHandler};
pub use links::LinksHandler;
pub use server_info::{AdminHandler, InfoHandler, MotdHandler, TimeHandler, VersionHandler};
pub use stats::StatsHandler;

use ircserv_proto::irc_eq;

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::Context;

/// Reject a `[server]` argument naming anything but this server.
fn ensure_local_target(ctx: &Context<'_>, target: Option<&str>) -> HandlerResult {
    match target {
        Some(name) if !irc_eq(name, ctx.server_name()) => {
            Err(HandlerError::NoSuchServer(name.to_string()))
        }
        _ => Ok(()),
    }
}
