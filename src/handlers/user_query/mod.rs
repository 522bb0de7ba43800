//! User query handlers: WHO, WHOIS, WHOWAS, USERHOST, ISON.

mod who;
mod whois;

pub use who::WhoHandler;
pub use whois::{IsonHandler, UserhostHandler, WhoisHandler, WhowasHandler};
