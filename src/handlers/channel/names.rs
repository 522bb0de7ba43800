//! NAMES command handler.

use ircserv_proto::MessageRef;

use crate::error::HandlerResult;
use crate::handlers::helpers::{send_names, split_list};
use crate::handlers::{Context, Handler};

/// Handler for NAMES command.
///
/// `NAMES [<chan>{,<chan>}]`; without arguments every channel is listed.
pub struct NamesHandler;

impl Handler for NamesHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        match msg.arg(0).filter(|a| !a.is_empty()) {
            Some(list) => {
                for name in split_list(list) {
                    send_names(ctx, name);
                }
            }
            None => {
                let mut all: Vec<String> = ctx
                    .matrix
                    .channels
                    .values()
                    .map(|c| c.name.clone())
                    .collect();
                all.sort();
                for name in all {
                    send_names(ctx, &name);
                }
            }
        }
        Ok(())
    }
}
