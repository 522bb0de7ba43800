//! IRC command types, parsing and serialization.

mod parse;
mod serialize;
mod types;
pub(crate) mod util;

pub use self::types::Command;
