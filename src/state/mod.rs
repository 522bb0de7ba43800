//! Server state: sessions, channels and the actor that owns them.

pub mod actor;
mod channel;
mod lifecycle;
mod matrix;
mod mode_builder;
mod session;
mod uid;

pub use actor::{ServerActor, ServerEvent};
pub use channel::{Channel, Topic};
pub use matrix::{Departure, Matrix};
pub use mode_builder::ModeChangeBuilder;
pub use session::{Session, SessionPhase, USER_HOST};
pub use uid::{ConnId, ConnIdGenerator};
