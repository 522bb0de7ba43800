//! IRC command handlers.
//!
//! Handlers receive `MessageRef<'_>` borrowed from the inbound line and a
//! [`Context`] holding the server state; use `msg.arg(n)` to access
//! arguments as `&str` slices.

mod cap;
mod channel;
mod connection;
mod core;
mod helpers;
mod messaging;
mod mode;
mod oper;
mod server_query;
mod user_query;
mod user_status;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::core::{Context, Handler, Registry};
