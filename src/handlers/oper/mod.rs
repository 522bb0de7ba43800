//! Operator command handlers split into submodules.

mod admin;
mod auth;
mod connect;
mod kill;
mod squit;
mod wallops;

pub use admin::{RehashHandler, RestartHandler};
pub use auth::OperHandler;
pub use connect::ConnectHandler;
pub use kill::KillHandler;
pub use squit::SquitHandler;
pub use wallops::WallopsHandler;

#[cfg(test)]
pub(super) mod test_util {
    use ircserv_proto::Message;
    use tokio::sync::mpsc;

    use crate::handlers::test_support::register;
    use crate::state::{ConnId, Matrix};

    /// A registered session that already holds IRC operator status.
    pub fn register_oper(m: &mut Matrix, n: u64, nick: &str) -> (ConnId, mpsc::Receiver<Message>) {
        let (id, rx) = register(m, n, nick);
        if let Some(session) = m.session_mut(id) {
            session.modes.oper = true;
        }
        (id, rx)
    }
}
