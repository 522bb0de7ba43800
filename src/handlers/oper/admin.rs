use ircserv_proto::{MessageRef, Response};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::HandlerResult;
use crate::handlers::{Context, Handler};

/// Handler for REHASH command.
///
/// Re-reads the config file. The server name and listener stay fixed.
pub struct RehashHandler;

impl Handler for RehashHandler {
    fn handle(&self, ctx: &mut Context<'_>, _msg: &MessageRef<'_>) -> HandlerResult {
        ctx.require_oper()?;

        let nick = ctx.nick();
        let path = ctx.matrix.config_path.clone();
        match Config::load(&path) {
            Ok(mut config) => {
                config.server.name = ctx.matrix.config.server.name.clone();
                config.server.host = ctx.matrix.config.server.host.clone();
                ctx.matrix.server_info.description = config.server.description.clone();
                ctx.matrix.config = config;
                info!(oper = %nick, path = %path.display(), "Configuration reloaded");

                let file = path
                    .file_name()
                    .map_or_else(|| path.display().to_string(), |f| f.to_string_lossy().into_owned());
                ctx.send_reply(Response::RPL_REHASHING, vec![file, "Rehashing".to_string()]);
            }
            Err(e) => {
                warn!(oper = %nick, path = %path.display(), error = %e, "REHASH failed");
                ctx.notice("Error reloading configuration file");
            }
        }
        Ok(())
    }
}

/// Handler for RESTART command.
///
/// Closes every link and stops the server; a supervisor brings it back.
pub struct RestartHandler;

impl Handler for RestartHandler {
    fn handle(&self, ctx: &mut Context<'_>, _msg: &MessageRef<'_>) -> HandlerResult {
        ctx.require_oper()?;

        let nick = ctx.nick();
        warn!(oper = %nick, "RESTART command issued - initiating shutdown");
        ctx.matrix
            .shutdown(&format!("Closing Link: Server restart by {nick}"));
        Ok(())
    }
}
