//! PRIVMSG and NOTICE handlers.

mod delivery;
mod notice;
mod privmsg;

pub use notice::NoticeHandler;
pub use privmsg::PrivmsgHandler;
